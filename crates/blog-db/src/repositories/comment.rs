//! PostgreSQL implementation of CommentReader and CommentWriter

use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::instrument;

use blog_core::entities::{Comment, NewComment};
use blog_core::error::DomainError;
use blog_core::traits::{CommentFilter, CommentReader, CommentWriter, RepoResult};
use blog_core::value_objects::RecordId;

use crate::models::CommentModel;

use super::error::{map_db_error, map_unique_violation};
use super::session::PgSession;

/// Build the listing query with one equality condition per present filter
fn list_query(filter: &CommentFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT user_id, blog_id, message, created_date FROM comments",
    );

    let mut keyword = " WHERE ";
    if let Some(user_id) = filter.user_id {
        query.push(keyword).push("user_id = ").push_bind(user_id.into_inner());
        keyword = " AND ";
    }
    if let Some(blog_id) = filter.blog_id {
        query.push(keyword).push("blog_id = ").push_bind(blog_id.into_inner());
    }

    query.push(" ORDER BY blog_id, user_id");
    query
}

#[async_trait]
impl CommentReader for PgSession {
    #[instrument(skip(self))]
    async fn find_comment(
        &mut self,
        user_id: RecordId,
        blog_id: RecordId,
    ) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT user_id, blog_id, message, created_date
            FROM comments
            WHERE user_id = $1 AND blog_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(blog_id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn comment_exists(&mut self, user_id: RecordId, blog_id: RecordId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_id FROM comments WHERE user_id = $1 AND blog_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(blog_id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.is_some())
    }

    #[instrument(skip(self))]
    async fn list_comments(&mut self, filter: &CommentFilter) -> RepoResult<Vec<Comment>> {
        let results = list_query(filter)
            .build_query_as::<CommentModel>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}

#[async_trait]
impl CommentWriter for PgSession {
    #[instrument(skip(self, comment), fields(user_id = %comment.user_id, blog_id = %comment.blog_id))]
    async fn insert_comment(&mut self, comment: &NewComment) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (user_id, blog_id, message)
            VALUES ($1, $2, $3)
            RETURNING user_id, blog_id, message, created_date
            "#,
        )
        .bind(comment.user_id.into_inner())
        .bind(comment.blog_id.into_inner())
        .bind(&comment.message)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::CommentAlreadyExists {
                user_id: comment.user_id,
                blog_id: comment.blog_id,
            })
        })?;

        Ok(Comment::from(result))
    }

    #[instrument(skip(self, message))]
    async fn update_comment_message(
        &mut self,
        user_id: RecordId,
        blog_id: RecordId,
        message: &str,
    ) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            UPDATE comments
            SET message = $3
            WHERE user_id = $1 AND blog_id = $2
            RETURNING user_id, blog_id, message, created_date
            "#,
        )
        .bind(user_id.into_inner())
        .bind(blog_id.into_inner())
        .bind(message)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn delete_comment(&mut self, user_id: RecordId, blog_id: RecordId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments WHERE user_id = $1 AND blog_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(blog_id.into_inner())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_comments_by_blog(&mut self, blog_id: RecordId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments WHERE blog_id = $1
            "#,
        )
        .bind(blog_id.into_inner())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_comments_by_user(&mut self, user_id: RecordId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
