//! In-memory implementation of Session and the reader/writer ports

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::OwnedMutexGuard;

use blog_core::entities::{Blog, Comment, NewBlog, NewComment, NewUser, User};
use blog_core::error::DomainError;
use blog_core::traits::{
    BlogReader, BlogWriter, CommentFilter, CommentReader, CommentWriter, RepoResult, Session,
    UserReader, UserWriter,
};
use blog_core::value_objects::RecordId;

use super::faults::{FaultSet, Operation};
use super::Tables;

/// One in-memory transaction
///
/// Reads go straight to the published tables. The first write copies them
/// into `working`, and every later read and write of the session uses that copy.
pub struct MemorySession {
    published: OwnedMutexGuard<Tables>,
    working: Option<Tables>,
    faults: Arc<Mutex<FaultSet>>,
}

impl MemorySession {
    pub(super) fn new(published: OwnedMutexGuard<Tables>, faults: Arc<Mutex<FaultSet>>) -> Self {
        Self {
            published,
            working: None,
            faults,
        }
    }

    fn check(&self, op: Operation) -> RepoResult<()> {
        self.faults.lock().check(op)
    }

    fn tables(&self) -> &Tables {
        self.working.as_ref().unwrap_or(&*self.published)
    }

    fn tables_mut(&mut self) -> &mut Tables {
        let published: &Tables = &self.published;
        self.working.get_or_insert_with(|| published.clone())
    }
}

fn comment_key(user_id: RecordId, blog_id: RecordId) -> (i64, i64) {
    (blog_id.into_inner(), user_id.into_inner())
}

#[async_trait]
impl UserReader for MemorySession {
    async fn find_user(&mut self, id: RecordId) -> RepoResult<Option<User>> {
        self.check(Operation::FindUser)?;
        Ok(self.tables().users.get(&id.into_inner()).cloned())
    }

    async fn user_exists(&mut self, id: RecordId) -> RepoResult<bool> {
        self.check(Operation::FindUser)?;
        Ok(self.tables().users.contains_key(&id.into_inner()))
    }

    async fn list_users(&mut self) -> RepoResult<Vec<User>> {
        self.check(Operation::ListUsers)?;
        Ok(self.tables().users.values().cloned().collect())
    }
}

#[async_trait]
impl UserWriter for MemorySession {
    async fn lock_user(&mut self, id: RecordId) -> RepoResult<bool> {
        self.check(Operation::LockUser)?;
        Ok(self.tables().users.contains_key(&id.into_inner()))
    }

    async fn insert_user(&mut self, user: &NewUser) -> RepoResult<User> {
        self.check(Operation::InsertUser)?;
        let tables = self.tables_mut();
        tables.last_user_id += 1;
        let id = tables.last_user_id;
        let stored = user.clone().with_id(RecordId::new(id));
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_user(&mut self, id: RecordId, user: &NewUser) -> RepoResult<Option<User>> {
        self.check(Operation::UpdateUser)?;
        Ok(self.tables_mut().users.get_mut(&id.into_inner()).map(|stored| {
            *stored = user.clone().with_id(id);
            stored.clone()
        }))
    }

    async fn delete_user(&mut self, id: RecordId) -> RepoResult<bool> {
        self.check(Operation::DeleteUser)?;
        Ok(self.tables_mut().users.remove(&id.into_inner()).is_some())
    }
}

#[async_trait]
impl BlogReader for MemorySession {
    async fn find_blog(&mut self, id: RecordId) -> RepoResult<Option<Blog>> {
        self.check(Operation::FindBlog)?;
        Ok(self.tables().blogs.get(&id.into_inner()).cloned())
    }

    async fn blog_exists(&mut self, id: RecordId) -> RepoResult<bool> {
        self.check(Operation::FindBlog)?;
        Ok(self.tables().blogs.contains_key(&id.into_inner()))
    }

    async fn list_blogs(&mut self) -> RepoResult<Vec<Blog>> {
        self.check(Operation::ListBlogs)?;
        Ok(self.tables().blogs.values().cloned().collect())
    }

}

#[async_trait]
impl BlogWriter for MemorySession {
    async fn lock_blog(&mut self, id: RecordId) -> RepoResult<bool> {
        self.check(Operation::LockBlog)?;
        Ok(self.tables().blogs.contains_key(&id.into_inner()))
    }

    async fn lock_blogs_by_author(&mut self, author_id: RecordId) -> RepoResult<Vec<RecordId>> {
        self.check(Operation::LockBlog)?;
        Ok(self
            .tables()
            .blogs
            .values()
            .filter(|blog| blog.is_authored_by(author_id))
            .map(|blog| blog.id)
            .collect())
    }

    async fn insert_blog(&mut self, blog: &NewBlog) -> RepoResult<Blog> {
        self.check(Operation::InsertBlog)?;
        let tables = self.tables_mut();
        tables.last_blog_id += 1;
        let id = tables.last_blog_id;
        let stored = blog.clone().hydrate(RecordId::new(id), Utc::now());
        tables.blogs.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_blog(&mut self, id: RecordId, blog: &NewBlog) -> RepoResult<Option<Blog>> {
        self.check(Operation::UpdateBlog)?;
        Ok(self.tables_mut().blogs.get_mut(&id.into_inner()).map(|stored| {
            *stored = blog.clone().hydrate(id, stored.created_date);
            stored.clone()
        }))
    }

    async fn delete_blog(&mut self, id: RecordId) -> RepoResult<bool> {
        self.check(Operation::DeleteBlog)?;
        Ok(self.tables_mut().blogs.remove(&id.into_inner()).is_some())
    }

    async fn delete_blogs_by_author(&mut self, author_id: RecordId) -> RepoResult<u64> {
        self.check(Operation::DeleteBlogsByAuthor)?;
        let blogs = &mut self.tables_mut().blogs;
        let before = blogs.len();
        blogs.retain(|_, blog| !blog.is_authored_by(author_id));
        Ok((before - blogs.len()) as u64)
    }
}

#[async_trait]
impl CommentReader for MemorySession {
    async fn find_comment(
        &mut self,
        user_id: RecordId,
        blog_id: RecordId,
    ) -> RepoResult<Option<Comment>> {
        self.check(Operation::ListComments)?;
        Ok(self.tables().comments.get(&comment_key(user_id, blog_id)).cloned())
    }

    async fn comment_exists(&mut self, user_id: RecordId, blog_id: RecordId) -> RepoResult<bool> {
        self.check(Operation::ListComments)?;
        Ok(self.tables().comments.contains_key(&comment_key(user_id, blog_id)))
    }

    async fn list_comments(&mut self, filter: &CommentFilter) -> RepoResult<Vec<Comment>> {
        self.check(Operation::ListComments)?;
        Ok(self
            .tables()
            .comments
            .values()
            .filter(|comment| filter.matches(comment))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentWriter for MemorySession {
    async fn insert_comment(&mut self, comment: &NewComment) -> RepoResult<Comment> {
        self.check(Operation::InsertComment)?;
        let key = comment_key(comment.user_id, comment.blog_id);
        if self.tables().comments.contains_key(&key) {
            return Err(DomainError::CommentAlreadyExists {
                user_id: comment.user_id,
                blog_id: comment.blog_id,
            });
        }
        let stored = comment.clone().hydrate(Utc::now());
        self.tables_mut().comments.insert(key, stored.clone());
        Ok(stored)
    }

    async fn update_comment_message(
        &mut self,
        user_id: RecordId,
        blog_id: RecordId,
        message: &str,
    ) -> RepoResult<Option<Comment>> {
        self.check(Operation::UpdateComment)?;
        Ok(self
            .tables_mut()
            .comments
            .get_mut(&comment_key(user_id, blog_id))
            .map(|stored| {
                stored.message = message.to_string();
                stored.clone()
            }))
    }

    async fn delete_comment(&mut self, user_id: RecordId, blog_id: RecordId) -> RepoResult<u64> {
        self.check(Operation::DeleteComment)?;
        let removed = self.tables_mut().comments.remove(&comment_key(user_id, blog_id));
        Ok(u64::from(removed.is_some()))
    }

    async fn delete_comments_by_blog(&mut self, blog_id: RecordId) -> RepoResult<u64> {
        self.check(Operation::DeleteCommentsByBlog)?;
        let comments = &mut self.tables_mut().comments;
        let before = comments.len();
        comments.retain(|_, c| c.blog_id != blog_id);
        Ok((before - comments.len()) as u64)
    }

    async fn delete_comments_by_user(&mut self, user_id: RecordId) -> RepoResult<u64> {
        self.check(Operation::DeleteCommentsByUser)?;
        let comments = &mut self.tables_mut().comments;
        let before = comments.len();
        comments.retain(|_, c| c.user_id != user_id);
        Ok((before - comments.len()) as u64)
    }
}

#[async_trait]
impl Session for MemorySession {
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.check(Operation::Commit)?;
        let Self {
            mut published,
            working,
            ..
        } = *self;
        if let Some(working) = working {
            *published = working;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blog_core::traits::Store;

    use super::*;
    use crate::memory::MemoryStore;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_commit_publishes_writes() {
        let store = MemoryStore::new();

        let mut session = store.begin().await.unwrap();
        let ada = session.insert_user(&new_user("ada")).await.unwrap();
        session.commit().await.unwrap();

        let mut session = store.begin().await.unwrap();
        assert_eq!(session.find_user(ada.id).await.unwrap(), Some(ada));
    }

    #[tokio::test]
    async fn test_drop_discards_writes() {
        let store = MemoryStore::new();

        {
            let mut session = store.begin().await.unwrap();
            session.insert_user(&new_user("ada")).await.unwrap();
        }

        let mut session = store.begin().await.unwrap();
        assert!(session.list_users().await.unwrap().is_empty());
    }

    async fn open(store: &MemoryStore) -> MemorySession {
        let guard = Arc::clone(&store.tables).lock_owned().await;
        MemorySession::new(guard, Arc::clone(&store.faults))
    }

    #[tokio::test]
    async fn test_reads_do_not_copy_tables() {
        let store = MemoryStore::new();
        let mut session = open(&store).await;
        let ada = session.insert_user(&new_user("ada")).await.unwrap();
        Box::new(session).commit().await.unwrap();

        let mut session = open(&store).await;
        assert_eq!(session.find_user(ada.id).await.unwrap(), Some(ada.clone()));
        assert!(session.lock_user(ada.id).await.unwrap());
        assert_eq!(session.list_users().await.unwrap().len(), 1);
        assert!(session.working.is_none());

        session.delete_user(ada.id).await.unwrap();
        assert!(session.working.is_some());
        assert!(session.find_user(ada.id).await.unwrap().is_none());
        assert!(session.published.users.contains_key(&ada.id.into_inner()));
    }

    #[tokio::test]
    async fn test_read_only_commit_keeps_tables() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let ada = session.insert_user(&new_user("ada")).await.unwrap();
        session.commit().await.unwrap();

        let mut session = store.begin().await.unwrap();
        session.list_users().await.unwrap();
        session.commit().await.unwrap();

        let mut session = store.begin().await.unwrap();
        assert_eq!(session.find_user(ada.id).await.unwrap(), Some(ada));
    }

    #[tokio::test]
    async fn test_lock_blogs_by_author() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let mut ids = Vec::new();
        for author in [1, 2, 1] {
            let blog = session
                .insert_blog(&NewBlog {
                    author_id: RecordId::new(author),
                    title: "Post".to_string(),
                    score: 1.0,
                })
                .await
                .unwrap();
            ids.push(blog.id);
        }

        assert_eq!(
            session.lock_blogs_by_author(RecordId::new(1)).await.unwrap(),
            vec![ids[0], ids[2]]
        );
        assert!(session.lock_blog(ids[1]).await.unwrap());
        assert!(!session.lock_blog(RecordId::new(9)).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = MemoryStore::new();

        let mut session = store.begin().await.unwrap();
        let first = session.insert_user(&new_user("ada")).await.unwrap();
        assert!(session.delete_user(first.id).await.unwrap());
        let second = session.insert_user(&new_user("bob")).await.unwrap();
        session.commit().await.unwrap();

        assert_eq!(first.id, RecordId::new(1));
        assert_eq!(second.id, RecordId::new(2));
    }

    #[tokio::test]
    async fn test_duplicate_comment_is_a_conflict() {
        let store = MemoryStore::new();
        let comment = NewComment {
            user_id: RecordId::new(1),
            blog_id: RecordId::new(1),
            message: "first".to_string(),
        };

        let mut session = store.begin().await.unwrap();
        session.insert_comment(&comment).await.unwrap();
        let err = session.insert_comment(&comment).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_comments_listed_by_blog_then_user() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        for (user_id, blog_id) in [(2, 1), (1, 2), (1, 1)] {
            session
                .insert_comment(&NewComment {
                    user_id: RecordId::new(user_id),
                    blog_id: RecordId::new(blog_id),
                    message: "hi".to_string(),
                })
                .await
                .unwrap();
        }

        let keys: Vec<_> = session
            .list_comments(&CommentFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|c| (c.blog_id.into_inner(), c.user_id.into_inner()))
            .collect();
        assert_eq!(keys, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[tokio::test]
    async fn test_update_blog_keeps_created_date() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let blog = session
            .insert_blog(&NewBlog {
                author_id: RecordId::new(1),
                title: "Before".to_string(),
                score: 1.0,
            })
            .await
            .unwrap();

        let updated = session
            .update_blog(
                blog.id,
                &NewBlog {
                    author_id: RecordId::new(2),
                    title: "After".to_string(),
                    score: 9.5,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.created_date, blog.created_date);
        assert_eq!(updated.title, "After");
        assert!(session
            .update_blog(RecordId::new(99), &NewBlog {
                author_id: RecordId::new(2),
                title: "Nope".to_string(),
                score: 1.0,
            })
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_injected_fault() {
        let store = MemoryStore::new();
        store.fail_on(Operation::Commit);

        let mut session = store.begin().await.unwrap();
        session.insert_user(&new_user("ada")).await.unwrap();
        assert!(session.commit().await.is_err());

        store.clear_fault(Operation::Commit);
        let mut session = store.begin().await.unwrap();
        assert!(session.list_users().await.unwrap().is_empty());
        assert_eq!(store.begin_count(), 2);
    }
}
