//! Blog service
//!
//! Every write checks its references inside the same transaction that
//! performs it.

use blog_core::entities::NewBlog;
use blog_core::{DomainError, RecordId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{BlogRequest, BlogResponse, BlogsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lookups::{claim_blog, require_user};

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a blog for an existing author
    #[instrument(skip(self, request), fields(author_id = %request.authorid))]
    pub async fn create_blog(&self, request: BlogRequest) -> ServiceResult<BlogResponse> {
        async move {
            request.validate()?;
            let blog = NewBlog::from(request);

            let mut session = self.ctx.store().begin().await?;
            require_user(&mut *session, blog.author_id, DomainError::UnknownAuthor).await?;
            let blog = session.insert_blog(&blog).await?;
            session.commit().await?;

            info!(blog_id = %blog.id, "Blog created");
            Ok::<_, ServiceError>(BlogResponse::from(blog))
        }
        .await
        .map_err(|e| e.context("BlogService::create_blog"))
    }

    /// Get blog by ID
    #[instrument(skip(self))]
    pub async fn get_blog(&self, blog_id: RecordId) -> ServiceResult<BlogResponse> {
        async move {
            let mut session = self.ctx.store().begin().await?;
            let blog = session
                .find_blog(blog_id)
                .await?
                .ok_or(DomainError::BlogNotFound(blog_id))?;

            Ok::<_, ServiceError>(BlogResponse::from(blog))
        }
        .await
        .map_err(|e| e.context("BlogService::get_blog"))
    }

    /// Replace author, title and score of a blog; the created date is kept
    #[instrument(skip(self, request))]
    pub async fn update_blog(
        &self,
        blog_id: RecordId,
        request: BlogRequest,
    ) -> ServiceResult<BlogResponse> {
        async move {
            request.validate()?;
            let blog = NewBlog::from(request);

            let mut session = self.ctx.store().begin().await?;
            // Users before blogs, the order DeleteUser locks in
            let author_known = session.user_exists(blog.author_id).await?;
            claim_blog(&mut *session, blog_id, DomainError::BlogNotFound).await?;
            if !author_known {
                return Err(ServiceError::from(DomainError::UnknownAuthor(blog.author_id)));
            }
            let blog = session
                .update_blog(blog_id, &blog)
                .await?
                .ok_or(DomainError::BlogNotFound(blog_id))?;
            session.commit().await?;

            info!(blog_id = %blog_id, "Blog updated");
            Ok::<_, ServiceError>(BlogResponse::from(blog))
        }
        .await
        .map_err(|e| e.context("BlogService::update_blog"))
    }

    /// Delete a blog and every comment on it
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, blog_id: RecordId) -> ServiceResult<()> {
        async move {
            let mut session = self.ctx.store().begin().await?;
            claim_blog(&mut *session, blog_id, DomainError::BlogNotFound).await?;
            let comments = session.delete_comments_by_blog(blog_id).await?;
            session.delete_blog(blog_id).await?;
            session.commit().await?;

            info!(blog_id = %blog_id, comments, "Blog deleted");
            Ok::<_, ServiceError>(())
        }
        .await
        .map_err(|e| e.context("BlogService::delete_blog"))
    }

    /// List blogs, optionally only those with exactly the given title
    #[instrument(skip(self))]
    pub async fn list_blogs(&self, title: &str) -> ServiceResult<BlogsResponse> {
        async move {
            let mut session = self.ctx.store().begin().await?;
            let mut blogs = session.list_blogs().await?;
            blogs.retain(|blog| blog.matches_title(title));

            Ok::<_, ServiceError>(BlogsResponse::from(blogs))
        }
        .await
        .map_err(|e| e.context("BlogService::list_blogs"))
    }
}

impl From<BlogRequest> for NewBlog {
    fn from(request: BlogRequest) -> Self {
        Self {
            author_id: request.authorid,
            title: request.title,
            score: request.score,
        }
    }
}
