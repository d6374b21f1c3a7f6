pub mod block_entity;
pub mod block_state;
pub mod grid;
pub mod palette;

// Re-export commonly used items
pub use block_entity::{BlockEntity, BlockEntityKind, ItemSlot, SIGN_LINES};
pub use block_state::BlockState;
pub use grid::Grid;
pub use palette::Palette;
