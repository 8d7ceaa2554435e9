pub mod directory;
pub mod identity;

// Re-export key types for convenience
pub use directory::{DirectoryOptions, UserDirectory, CURRENT_USER_KEY, USERS_KEY};
pub use identity::AuthService;
