//! # User Directory
//!
//! Local directory of user records with a single signed-in session, kept in
//! an on-device key-value store as JSON.
//!
//! ## Architecture
//!
//! - **domain**: the `User` record and the DTOs the directory accepts
//! - **application**: directory CRUD and the sign-in flow
//! - **infrastructure**: key-value store backends (file, in-memory)
//! - **shared**: error types and input validation
//! - **config**: TOML configuration
//! - **support**: tracing setup

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod support;

pub use app::App;
pub use application::{AuthService, DirectoryOptions, UserDirectory};
pub use config::{default_config_path, AppConfig};
pub use domain::{CreateUserDto, DomainError, DomainResult, UpdateUserDto, User};
pub use infrastructure::{FileStore, InMemoryStore, KeyValueStore};
pub use support::telemetry::init_tracing;
