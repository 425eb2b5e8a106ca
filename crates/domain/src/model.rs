pub mod entities;
pub mod value_objects;

pub use entities::{DirectoryEntry, Listing};
pub use value_objects::ColumnWidths;
