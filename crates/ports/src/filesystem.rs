// crates/ports/src/filesystem.rs
use std::{
    io,
    path::{Path, PathBuf},
};

use dirsize_shared_kernel::{FileMode, ModificationTime};

/// Entry type as seen without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Devices, FIFOs, sockets and anything else.
    Other,
}

/// `lstat`-style metadata for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    pub len: u64,
    pub mode: FileMode,
    pub uid: u32,
    pub gid: u32,
    pub modified: ModificationTime,
}

/// One path visited during a recursive walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// A directory the walk could not open or read.
#[derive(Debug)]
pub struct WalkError {
    pub path: PathBuf,
    pub source: io::Error,
}

/// Port for read-only filesystem access.
pub trait FileSystem: Send + Sync {
    /// Immediate children of `path`, in directory-read order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Metadata of `path` itself; symlinks are not followed.
    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryMetadata>;

    /// Metadata of whatever `path` finally points at, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;

    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Visits every path below `root` at any depth, never descending through symlinks.
    ///
    /// A directory that cannot be read is handed to `on_error` and the walk
    /// carries on with its siblings.
    fn walk(&self, root: &Path, visit: &mut dyn FnMut(WalkEntry), on_error: &mut dyn FnMut(WalkError));
}
