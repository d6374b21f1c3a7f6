pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::CraftmaticError;
pub use types::{ContainerKind, Facing, Result};
