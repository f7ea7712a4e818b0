//! Integration test utilities for the blog server
//!
//! This crate spawns the real server on a loopback port and drives it
//! over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
