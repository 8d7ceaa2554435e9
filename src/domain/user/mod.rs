//! User aggregate
//!
//! Contains the User record and the DTOs accepted by the directory.

pub mod model;

mod dto_create;
mod dto_update;

// Re-export model types
pub use model::{User, ADMIN_ID, ADMIN_NAME};

// Re-export DTOs
pub use dto_create::CreateUserDto;
pub use dto_update::UpdateUserDto;
