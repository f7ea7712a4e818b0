//! User service
//!
//! Handles user accounts. Passwords are hashed before they reach storage.

use blog_core::entities::NewUser;
use blog_core::{DomainError, RecordId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{UserRequest, UserResponse, UsersResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lookups::claim_user;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn new_user(&self, request: UserRequest) -> ServiceResult<NewUser> {
        let password_hash = self.ctx.passwords().hash(&request.password)?;
        Ok(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        })
    }

    /// Create a user
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: UserRequest) -> ServiceResult<UserResponse> {
        async move {
            request.validate()?;
            let user = self.new_user(request)?;

            let mut session = self.ctx.store().begin().await?;
            let user = session.insert_user(&user).await?;
            session.commit().await?;

            info!(user_id = %user.id, "User created");
            Ok::<_, ServiceError>(UserResponse::from(user))
        }
        .await
        .map_err(|e| e.context("UserService::create_user"))
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: RecordId) -> ServiceResult<UserResponse> {
        async move {
            let mut session = self.ctx.store().begin().await?;
            let user = session
                .find_user(user_id)
                .await?
                .ok_or(DomainError::UserNotFound(user_id))?;

            Ok::<_, ServiceError>(UserResponse::from(user))
        }
        .await
        .map_err(|e| e.context("UserService::get_user"))
    }

    /// Replace name, email and password of a user
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: RecordId,
        request: UserRequest,
    ) -> ServiceResult<UserResponse> {
        async move {
            request.validate()?;
            let user = self.new_user(request)?;

            let mut session = self.ctx.store().begin().await?;
            let user = session
                .update_user(user_id, &user)
                .await?
                .ok_or(DomainError::UserNotFound(user_id))?;
            session.commit().await?;

            info!(user_id = %user_id, "User updated");
            Ok::<_, ServiceError>(UserResponse::from(user))
        }
        .await
        .map_err(|e| e.context("UserService::update_user"))
    }

    /// Delete a user together with everything they wrote
    ///
    /// Removes, in one transaction, the user's comments, every comment on
    /// the user's blogs, the user's blogs, and finally the user. The user
    /// and their blogs are claimed before anything is deleted, so a
    /// concurrent write that references them either commits first and is
    /// swept up, or waits and then finds them gone.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: RecordId) -> ServiceResult<()> {
        async move {
            let mut session = self.ctx.store().begin().await?;
            claim_user(&mut *session, user_id, DomainError::UserNotFound).await?;
            let blogs = session.lock_blogs_by_author(user_id).await?;

            let mut comments = session.delete_comments_by_user(user_id).await?;
            for blog_id in &blogs {
                comments += session.delete_comments_by_blog(*blog_id).await?;
            }
            session.delete_blogs_by_author(user_id).await?;
            session.delete_user(user_id).await?;
            session.commit().await?;

            info!(
                user_id = %user_id,
                blogs = blogs.len(),
                comments,
                "User deleted"
            );
            Ok::<_, ServiceError>(())
        }
        .await
        .map_err(|e| e.context("UserService::delete_user"))
    }

    /// List users, optionally only those with exactly the given name
    #[instrument(skip(self))]
    pub async fn list_users(&self, name: &str) -> ServiceResult<UsersResponse> {
        async move {
            let mut session = self.ctx.store().begin().await?;
            let mut users = session.list_users().await?;
            users.retain(|user| user.matches_name(name));

            Ok::<_, ServiceError>(UsersResponse::from(users))
        }
        .await
        .map_err(|e| e.context("UserService::list_users"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blog_core::entities::{NewBlog, NewComment};
    use blog_core::traits::Store;
    use blog_core::CommentFilter;
    use blog_db::{MemoryStore, Operation};

    use super::*;

    fn setup() -> (MemoryStore, ServiceContext) {
        let store = MemoryStore::new();
        let ctx = ServiceContext::new(Arc::new(store.clone()));
        (store, ctx)
    }

    fn request(name: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "hunter22".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let (store, ctx) = setup();
        let service = UserService::new(&ctx);

        let created = service.create_user(request("Ada")).await.unwrap();
        assert!(!created.id.is_unset());
        assert_eq!(service.get_user(created.id).await.unwrap(), created);

        let mut session = store.begin().await.unwrap();
        let stored = session.find_user(created.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "hunter22");
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_invalid_request_never_touches_storage() {
        let (store, ctx) = setup();
        let service = UserService::new(&ctx);

        let err = service.create_user(request("")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(store.begin_count(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let (_store, ctx) = setup();
        let err = UserService::new(&ctx).get_user(RecordId::new(42)).await.unwrap_err();

        assert!(matches!(err.domain(), Some(DomainError::UserNotFound(_))));
        assert_eq!(err.operation(), Some("UserService::get_user"));
    }

    #[tokio::test]
    async fn test_update_user() {
        let (_store, ctx) = setup();
        let service = UserService::new(&ctx);
        let created = service.create_user(request("Ada")).await.unwrap();

        let updated = service
            .update_user(created.id, request("Lovelace"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Lovelace");

        let err = service
            .update_user(RecordId::new(99), request("Ghost"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_list_users_by_exact_name() {
        let (_store, ctx) = setup();
        let service = UserService::new(&ctx);
        service.create_user(request("Ada")).await.unwrap();
        service.create_user(request("Bob")).await.unwrap();

        assert_eq!(service.list_users("").await.unwrap().users.len(), 2);

        let only_bob = service.list_users("Bob").await.unwrap();
        assert_eq!(only_bob.users.len(), 1);
        assert_eq!(only_bob.users[0].name, "Bob");

        assert!(service.list_users("bob").await.unwrap().users.is_empty());
    }

    /// Ada writes a blog, Bob comments on it, Ada comments on Bob's blog
    async fn seed_cascade(store: &MemoryStore, ctx: &ServiceContext) -> (RecordId, RecordId) {
        let users = UserService::new(ctx);
        let ada = users.create_user(request("Ada")).await.unwrap().id;
        let bob = users.create_user(request("Bob")).await.unwrap().id;

        let mut session = store.begin().await.unwrap();
        let ada_blog = session
            .insert_blog(&NewBlog {
                author_id: ada,
                title: "Ada's".to_string(),
                score: 5.0,
            })
            .await
            .unwrap();
        let bob_blog = session
            .insert_blog(&NewBlog {
                author_id: bob,
                title: "Bob's".to_string(),
                score: 5.0,
            })
            .await
            .unwrap();
        for (user_id, blog_id) in [(bob, ada_blog.id), (ada, bob_blog.id)] {
            session
                .insert_comment(&NewComment {
                    user_id,
                    blog_id,
                    message: "hi".to_string(),
                })
                .await
                .unwrap();
        }
        session.commit().await.unwrap();

        (ada, bob)
    }

    #[tokio::test]
    async fn test_delete_user_cascades() {
        let (store, ctx) = setup();
        let (ada, bob) = seed_cascade(&store, &ctx).await;

        UserService::new(&ctx).delete_user(ada).await.unwrap();

        let mut session = store.begin().await.unwrap();
        assert!(session.find_user(ada).await.unwrap().is_none());
        assert!(session.find_user(bob).await.unwrap().is_some());
        assert!(session
            .list_comments(&CommentFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_rolls_back_on_fault() {
        let (store, ctx) = setup();
        let (ada, _bob) = seed_cascade(&store, &ctx).await;
        store.fail_on(Operation::DeleteUser);

        let err = UserService::new(&ctx).delete_user(ada).await.unwrap_err();
        assert_eq!(err.status_code(), 500);

        let mut session = store.begin().await.unwrap();
        assert!(session.find_user(ada).await.unwrap().is_some());
        assert_eq!(
            session
                .list_comments(&CommentFilter::default())
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let (_store, ctx) = setup();
        let err = UserService::new(&ctx)
            .delete_user(RecordId::new(5))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
