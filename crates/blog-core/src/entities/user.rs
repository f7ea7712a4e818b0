//! User entity - an account that authors blogs and comments

use crate::value_objects::RecordId;

/// User record as stored
///
/// `password_hash` holds the Argon2id PHC string, never the plain password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Exact name match; an empty filter matches every user
    pub fn matches_name(&self, filter: &str) -> bool {
        filter.is_empty() || self.name == filter
    }
}

/// Values for inserting a user or fully replacing an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Hydrate into a stored record with the assigned id
    pub fn with_id(self, id: RecordId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
