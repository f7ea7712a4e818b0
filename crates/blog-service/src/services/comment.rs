//! Comment service
//!
//! A user may leave at most one comment per blog. Comments are addressed
//! by their `(user, blog)` pair.

use blog_core::entities::NewComment;
use blog_core::{CommentFilter, DomainError, RecordId};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{CommentKey, CommentRequest, CommentResponse, CommentsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lookups::{require_blog, require_user};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment from an existing user on an existing blog
    #[instrument(skip(self, request), fields(user_id = %request.user_id, blog_id = %request.blog_id))]
    pub async fn create_comment(&self, request: CommentRequest) -> ServiceResult<CommentResponse> {
        async move {
            request.validate()?;
            let comment = NewComment::from(request);

            let mut session = self.ctx.store().begin().await?;
            require_user(&mut *session, comment.user_id, DomainError::UnknownUser).await?;
            require_blog(&mut *session, comment.blog_id, DomainError::UnknownBlog).await?;
            if session
                .comment_exists(comment.user_id, comment.blog_id)
                .await?
            {
                return Err(ServiceError::from(DomainError::CommentAlreadyExists {
                    user_id: comment.user_id,
                    blog_id: comment.blog_id,
                }));
            }
            let comment = session.insert_comment(&comment).await?;
            session.commit().await?;

            info!("Comment created");
            Ok::<_, ServiceError>(CommentResponse::from(comment))
        }
        .await
        .map_err(|e| e.context("CommentService::create_comment"))
    }

    /// Replace the message of an existing comment
    #[instrument(skip(self, request), fields(user_id = %request.user_id, blog_id = %request.blog_id))]
    pub async fn update_comment(&self, request: CommentRequest) -> ServiceResult<CommentResponse> {
        async move {
            request.validate()?;
            let CommentRequest {
                user_id,
                blog_id,
                message,
            } = request;

            let mut session = self.ctx.store().begin().await?;
            require_user(&mut *session, user_id, DomainError::UnknownUser).await?;
            require_blog(&mut *session, blog_id, DomainError::UnknownBlog).await?;
            let comment = session
                .update_comment_message(user_id, blog_id, &message)
                .await?
                .ok_or(DomainError::CommentNotFound { user_id, blog_id })?;
            session.commit().await?;

            info!("Comment updated");
            Ok::<_, ServiceError>(CommentResponse::from(comment))
        }
        .await
        .map_err(|e| e.context("CommentService::update_comment"))
    }

    /// Delete the comment for a pair. Deleting a pair with no comment succeeds.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, key: CommentKey) -> ServiceResult<()> {
        async move {
            key.validate()?;

            let mut session = self.ctx.store().begin().await?;
            let removed = session.delete_comment(key.author_id, key.blog_id).await?;
            session.commit().await?;

            if removed == 0 {
                debug!("No comment to delete");
            } else {
                info!("Comment deleted");
            }
            Ok::<_, ServiceError>(())
        }
        .await
        .map_err(|e| e.context("CommentService::delete_comment"))
    }

    /// List comments; an unset id leaves that side unfiltered
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        user_id: RecordId,
        blog_id: RecordId,
    ) -> ServiceResult<CommentsResponse> {
        async move {
            let filter = CommentFilter::from_ids(user_id, blog_id);
            let mut session = self.ctx.store().begin().await?;
            let comments = session.list_comments(&filter).await?;

            Ok::<_, ServiceError>(CommentsResponse::from(comments))
        }
        .await
        .map_err(|e| e.context("CommentService::list_comments"))
    }
}

impl From<CommentRequest> for NewComment {
    fn from(request: CommentRequest) -> Self {
        Self {
            user_id: request.user_id,
            blog_id: request.blog_id,
            message: request.message,
        }
    }
}
