// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod file_mode;

pub use file_info::{FilePath, FileSize, ModificationTime};
pub use file_mode::FileMode;
