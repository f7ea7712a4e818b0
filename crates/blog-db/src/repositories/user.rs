//! PostgreSQL implementation of UserReader and UserWriter

use async_trait::async_trait;
use tracing::instrument;

use blog_core::entities::{NewUser, User};
use blog_core::traits::{RepoResult, UserReader, UserWriter};
use blog_core::value_objects::RecordId;

use crate::models::UserModel;

use super::error::map_db_error;
use super::session::PgSession;

#[async_trait]
impl UserReader for PgSession {
    #[instrument(skip(self))]
    async fn find_user(&mut self, id: RecordId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn user_exists(&mut self, id: RecordId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM users WHERE id = $1 FOR SHARE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.is_some())
    }

    #[instrument(skip(self))]
    async fn list_users(&mut self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl UserWriter for PgSession {
    #[instrument(skip(self))]
    async fn lock_user(&mut self, id: RecordId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM users WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.is_some())
    }

    #[instrument(skip(self, user), fields(name = %user.name))]
    async fn insert_user(&mut self, user: &NewUser) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(result))
    }

    #[instrument(skip(self, user))]
    async fn update_user(&mut self, id: RecordId, user: &NewUser) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET name = $2, email = $3, password = $4
            WHERE id = $1
            RETURNING id, name, email, password
            "#,
        )
        .bind(id.into_inner())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn delete_user(&mut self, id: RecordId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM users WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
