use crate::value_objects::{FileMode, FilePath, FileSize, ModificationTime};

/// One immediate child of the scanned directory.
///
/// `name` already carries the ` -> target` suffix for symbolic links; `path`
/// is the location used for any further I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: FilePath,
    pub total_size: FileSize,
    pub mode: FileMode,
    pub owner: String,
    pub group: String,
    pub modified_at: ModificationTime,
}
