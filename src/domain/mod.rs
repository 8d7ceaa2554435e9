pub mod user;

// Re-export commonly used types
pub use user::{CreateUserDto, UpdateUserDto, User, ADMIN_ID, ADMIN_NAME};

// Re-export errors from shared for convenience
pub use crate::shared::{DomainError, DomainResult};
