//! Fault injection for the in-memory store

use std::collections::HashSet;

use blog_core::error::DomainError;
use blog_core::traits::RepoResult;

/// Storage operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Begin,
    Commit,
    Ping,
    FindUser,
    LockUser,
    ListUsers,
    InsertUser,
    UpdateUser,
    DeleteUser,
    FindBlog,
    LockBlog,
    ListBlogs,
    InsertBlog,
    UpdateBlog,
    DeleteBlog,
    DeleteBlogsByAuthor,
    ListComments,
    InsertComment,
    UpdateComment,
    DeleteComment,
    DeleteCommentsByBlog,
    DeleteCommentsByUser,
}

#[derive(Debug, Default)]
pub(crate) struct FaultSet {
    failing: HashSet<Operation>,
}

impl FaultSet {
    pub(crate) fn insert(&mut self, op: Operation) {
        self.failing.insert(op);
    }

    pub(crate) fn remove(&mut self, op: Operation) {
        self.failing.remove(&op);
    }

    pub(crate) fn check(&self, op: Operation) -> RepoResult<()> {
        if self.failing.contains(&op) {
            Err(DomainError::DatabaseError(format!("injected fault: {op:?}")))
        } else {
            Ok(())
        }
    }
}
