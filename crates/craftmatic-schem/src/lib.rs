pub mod schematic;
pub mod varint;

// Re-export commonly used items
pub use schematic::{Schematic, DEFAULT_DATA_VERSION, ROOT_NAME, SCHEMATIC_VERSION};
pub use varint::{read_varint, write_varint};
