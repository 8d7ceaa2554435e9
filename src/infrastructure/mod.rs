//! Infrastructure layer
//!
//! Key-value store backends the directory persists into.

pub mod storage;

pub use storage::{open_store, FileStore, InMemoryStore, KeyValueStore};
