//! Identity module — sign-in, sign-out and the current session
//!
//! Contains the `AuthService`, which checks credentials against the
//! directory (or the built-in administrator) and maintains the session
//! pointer.

pub mod service;

pub use service::AuthService;
