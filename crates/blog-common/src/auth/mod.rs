//! Credential utilities

mod password;

pub use password::{hash_password, PasswordService};
