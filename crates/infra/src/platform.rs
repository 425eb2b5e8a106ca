// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the filesystem adapter stays
//! free of scattered conditional compilation directives.

use std::{
    fs::{FileType, Metadata},
    time::UNIX_EPOCH,
};

use dirsize_ports::filesystem::{EntryKind, EntryMetadata};
use dirsize_shared_kernel::ModificationTime;

/// Classifies a file type without following symlinks.
pub fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Converts `lstat` metadata into the port's representation.
pub fn entry_metadata(meta: &Metadata) -> EntryMetadata {
    let (mode, uid, gid) = ownership(meta);
    EntryMetadata {
        kind: entry_kind(meta.file_type()),
        len: meta.len(),
        mode,
        uid,
        gid,
        modified: ModificationTime::from(meta.modified().unwrap_or(UNIX_EPOCH)),
    }
}

// ============================================================================
// Mode and ownership
// ============================================================================

#[cfg(unix)]
fn ownership(meta: &Metadata) -> (dirsize_shared_kernel::FileMode, u32, u32) {
    use std::os::unix::fs::MetadataExt;

    (dirsize_shared_kernel::FileMode::from_bits(meta.mode()), meta.uid(), meta.gid())
}

/// Without unix mode bits the best available signal is the read-only flag.
#[cfg(not(unix))]
fn ownership(meta: &Metadata) -> (dirsize_shared_kernel::FileMode, u32, u32) {
    let file_type = meta.file_type();
    let type_char = if file_type.is_symlink() {
        'l'
    } else if file_type.is_dir() {
        'd'
    } else {
        '-'
    };
    let triplet = match (meta.permissions().readonly(), file_type.is_dir()) {
        (true, true) => "r-x",
        (true, false) => "r--",
        (false, true) => "rwx",
        (false, false) => "rw-",
    };
    let rendered = format!("{type_char}{triplet}{triplet}{triplet}");
    (dirsize_shared_kernel::FileMode::from_rendered(rendered), 0, 0)
}
