//! Value objects re-exported from the shared kernel.

pub use dirsize_shared_kernel::value_objects::{FileMode, FilePath, FileSize, ModificationTime};
