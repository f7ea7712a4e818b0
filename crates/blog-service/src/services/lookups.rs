//! Existence checks shared by the services
//!
//! Each helper asks only for the port it uses. `require_*` takes a shared
//! lock on a referenced row, `claim_*` an exclusive lock on a row about to
//! change.

use blog_core::traits::{BlogReader, BlogWriter, UserReader, UserWriter};
use blog_core::{DomainError, RecordId};

use super::error::ServiceResult;

/// Fail with `missing(id)` unless the user row exists
pub(crate) async fn require_user<S, F>(session: &mut S, id: RecordId, missing: F) -> ServiceResult<()>
where
    S: UserReader + ?Sized,
    F: FnOnce(RecordId) -> DomainError,
{
    if session.user_exists(id).await? {
        Ok(())
    } else {
        Err(missing(id).into())
    }
}

/// Fail with `missing(id)` unless the blog row exists
pub(crate) async fn require_blog<S, F>(session: &mut S, id: RecordId, missing: F) -> ServiceResult<()>
where
    S: BlogReader + ?Sized,
    F: FnOnce(RecordId) -> DomainError,
{
    if session.blog_exists(id).await? {
        Ok(())
    } else {
        Err(missing(id).into())
    }
}

/// Claim the user row for writing, failing with `missing(id)` when it is gone
pub(crate) async fn claim_user<S, F>(session: &mut S, id: RecordId, missing: F) -> ServiceResult<()>
where
    S: UserWriter + ?Sized,
    F: FnOnce(RecordId) -> DomainError,
{
    if session.lock_user(id).await? {
        Ok(())
    } else {
        Err(missing(id).into())
    }
}

/// Claim the blog row for writing, failing with `missing(id)` when it is gone
pub(crate) async fn claim_blog<S, F>(session: &mut S, id: RecordId, missing: F) -> ServiceResult<()>
where
    S: BlogWriter + ?Sized,
    F: FnOnce(RecordId) -> DomainError,
{
    if session.lock_blog(id).await? {
        Ok(())
    } else {
        Err(missing(id).into())
    }
}
