//! Directory module — persisted users and the session pointer

pub mod service;

pub use service::{DirectoryOptions, UserDirectory, CURRENT_USER_KEY, USERS_KEY};
