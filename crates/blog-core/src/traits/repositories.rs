//! Repository traits (ports) - define the interface for data access
//!
//! Every read and write happens inside a [`Session`], one storage
//! transaction. A session that is dropped without [`Session::commit`]
//! rolls back, so a cancelled request never leaves partial writes behind.
//!
//! The capability traits are deliberately narrow: a helper that only needs
//! to check whether a user exists takes `&mut impl UserReader`, nothing more.
//!
//! Row locks follow one rule. A session that references a row it does not
//! modify checks it with `*_exists`, a shared lock that blocks deletion. A
//! session that updates or deletes a row claims it first with `lock_*`, an
//! exclusive lock, so concurrent writers of one row run one at a time.

use async_trait::async_trait;

use crate::entities::{Blog, Comment, NewBlog, NewComment, NewUser, User};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Users
// ============================================================================

#[async_trait]
pub trait UserReader: Send {
    /// Find user by ID
    async fn find_user(&mut self, id: RecordId) -> RepoResult<Option<User>>;

    /// Check that a user row exists, holding a shared lock until the session ends
    async fn user_exists(&mut self, id: RecordId) -> RepoResult<bool>;

    /// All users ordered by id
    async fn list_users(&mut self) -> RepoResult<Vec<User>>;
}

#[async_trait]
pub trait UserWriter: Send {
    /// Claim a user row for writing until the session ends. `false` when missing.
    async fn lock_user(&mut self, id: RecordId) -> RepoResult<bool>;

    /// Insert a user; the store assigns the id
    async fn insert_user(&mut self, user: &NewUser) -> RepoResult<User>;

    /// Replace name, email and password hash. `None` when no row matched.
    async fn update_user(&mut self, id: RecordId, user: &NewUser) -> RepoResult<Option<User>>;

    /// Delete a user row, returning whether one was removed
    async fn delete_user(&mut self, id: RecordId) -> RepoResult<bool>;
}

// ============================================================================
// Blogs
// ============================================================================

#[async_trait]
pub trait BlogReader: Send {
    /// Find blog by ID
    async fn find_blog(&mut self, id: RecordId) -> RepoResult<Option<Blog>>;

    /// Check that a blog row exists, holding a shared lock until the session ends
    async fn blog_exists(&mut self, id: RecordId) -> RepoResult<bool>;

    /// All blogs ordered by id
    async fn list_blogs(&mut self) -> RepoResult<Vec<Blog>>;
}

#[async_trait]
pub trait BlogWriter: Send {
    /// Claim a blog row for writing until the session ends. `false` when missing.
    async fn lock_blog(&mut self, id: RecordId) -> RepoResult<bool>;

    /// Claim every blog by an author, returning their ids in order
    async fn lock_blogs_by_author(&mut self, author_id: RecordId) -> RepoResult<Vec<RecordId>>;

    /// Insert a blog; the store assigns id and created date
    async fn insert_blog(&mut self, blog: &NewBlog) -> RepoResult<Blog>;

    /// Replace author, title and score. `None` when no row matched.
    async fn update_blog(&mut self, id: RecordId, blog: &NewBlog) -> RepoResult<Option<Blog>>;

    /// Delete a blog row, returning whether one was removed
    async fn delete_blog(&mut self, id: RecordId) -> RepoResult<bool>;

    /// Delete every blog by an author, returning the number removed
    async fn delete_blogs_by_author(&mut self, author_id: RecordId) -> RepoResult<u64>;
}

// ============================================================================
// Comments
// ============================================================================

/// Equality filters for listing comments; `None` means "any"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub user_id: Option<RecordId>,
    pub blog_id: Option<RecordId>,
}

impl CommentFilter {
    /// Build a filter from raw ids where zero means "no filter"
    pub fn from_ids(user_id: RecordId, blog_id: RecordId) -> Self {
        Self {
            user_id: user_id.as_filter(),
            blog_id: blog_id.as_filter(),
        }
    }

    /// Check if a comment passes both filters
    pub fn matches(&self, comment: &Comment) -> bool {
        self.user_id.map_or(true, |id| comment.user_id == id)
            && self.blog_id.map_or(true, |id| comment.blog_id == id)
    }
}

#[async_trait]
pub trait CommentReader: Send {
    /// Find the comment a user left on a blog
    async fn find_comment(
        &mut self,
        user_id: RecordId,
        blog_id: RecordId,
    ) -> RepoResult<Option<Comment>>;

    /// Check whether the user already commented on the blog
    async fn comment_exists(&mut self, user_id: RecordId, blog_id: RecordId) -> RepoResult<bool>;

    /// Comments matching the filter, ordered by (blog_id, user_id)
    async fn list_comments(&mut self, filter: &CommentFilter) -> RepoResult<Vec<Comment>>;
}

#[async_trait]
pub trait CommentWriter: Send {
    /// Insert a comment; the store assigns the created date
    async fn insert_comment(&mut self, comment: &NewComment) -> RepoResult<Comment>;

    /// Replace the message of one comment. `None` when no row matched.
    async fn update_comment_message(
        &mut self,
        user_id: RecordId,
        blog_id: RecordId,
        message: &str,
    ) -> RepoResult<Option<Comment>>;

    /// Delete the comment for a pair, returning the number of rows removed
    async fn delete_comment(&mut self, user_id: RecordId, blog_id: RecordId) -> RepoResult<u64>;

    /// Delete every comment on a blog
    async fn delete_comments_by_blog(&mut self, blog_id: RecordId) -> RepoResult<u64>;

    /// Delete every comment written by a user
    async fn delete_comments_by_user(&mut self, user_id: RecordId) -> RepoResult<u64>;
}

// ============================================================================
// Transactions
// ============================================================================

/// One storage transaction exposing every port
///
/// Dropping a session without committing rolls back its writes.
#[async_trait]
pub trait Session:
    UserReader + UserWriter + BlogReader + BlogWriter + CommentReader + CommentWriter + Send
{
    /// Make every write of this session durable
    async fn commit(self: Box<Self>) -> RepoResult<()>;
}

/// Entry point to storage, shared across requests
#[async_trait]
pub trait Store: Send + Sync {
    /// Open a new transaction
    async fn begin(&self) -> RepoResult<Box<dyn Session>>;

    /// Round-trip to the backing store for readiness checks
    async fn ping(&self) -> RepoResult<()>;
}
