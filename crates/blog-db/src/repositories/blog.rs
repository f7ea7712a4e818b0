//! PostgreSQL implementation of BlogReader and BlogWriter

use async_trait::async_trait;
use tracing::instrument;

use blog_core::entities::{Blog, NewBlog};
use blog_core::traits::{BlogReader, BlogWriter, RepoResult};
use blog_core::value_objects::RecordId;

use crate::models::BlogModel;

use super::error::map_db_error;
use super::session::PgSession;

#[async_trait]
impl BlogReader for PgSession {
    #[instrument(skip(self))]
    async fn find_blog(&mut self, id: RecordId) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, author_id, title, score, created_date
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn blog_exists(&mut self, id: RecordId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM blogs WHERE id = $1 FOR SHARE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.is_some())
    }

    #[instrument(skip(self))]
    async fn list_blogs(&mut self) -> RepoResult<Vec<Blog>> {
        let results = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, author_id, title, score, created_date
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Blog::from).collect())
    }
}

#[async_trait]
impl BlogWriter for PgSession {
    #[instrument(skip(self))]
    async fn lock_blog(&mut self, id: RecordId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM blogs WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.is_some())
    }

    #[instrument(skip(self))]
    async fn lock_blogs_by_author(&mut self, author_id: RecordId) -> RepoResult<Vec<RecordId>> {
        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM blogs
            WHERE author_id = $1
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RecordId::new).collect())
    }

    #[instrument(skip(self, blog), fields(author_id = %blog.author_id))]
    async fn insert_blog(&mut self, blog: &NewBlog) -> RepoResult<Blog> {
        let result = sqlx::query_as::<_, BlogModel>(
            r#"
            INSERT INTO blogs (author_id, title, score)
            VALUES ($1, $2, $3)
            RETURNING id, author_id, title, score, created_date
            "#,
        )
        .bind(blog.author_id.into_inner())
        .bind(&blog.title)
        .bind(blog.score)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(Blog::from(result))
    }

    #[instrument(skip(self, blog))]
    async fn update_blog(&mut self, id: RecordId, blog: &NewBlog) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r#"
            UPDATE blogs
            SET author_id = $2, title = $3, score = $4
            WHERE id = $1
            RETURNING id, author_id, title, score, created_date
            "#,
        )
        .bind(id.into_inner())
        .bind(blog.author_id.into_inner())
        .bind(&blog.title)
        .bind(blog.score)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn delete_blog(&mut self, id: RecordId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM blogs WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_blogs_by_author(&mut self, author_id: RecordId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM blogs WHERE author_id = $1
            "#,
        )
        .bind(author_id.into_inner())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
