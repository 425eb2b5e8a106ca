// crates/infra/src/filesystem.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use dirsize_ports::filesystem::{EntryMetadata, FileSystem, WalkEntry, WalkError};
use ignore::WalkBuilder;
use log::trace;

use crate::platform::{entry_kind, entry_metadata};

/// Filesystem adapter implementing the `FileSystem` port on the local disk.
#[derive(Debug, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?.map(|entry| entry.map(|e| e.path())).collect()
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        fs::symlink_metadata(path).map(|meta| entry_metadata(&meta))
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        fs::metadata(path).map(|meta| entry_metadata(&meta))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn walk(&self, root: &Path, visit: &mut dyn FnMut(WalkEntry), on_error: &mut dyn FnMut(WalkError)) {
        let mut builder = WalkBuilder::new(root);
        // Every file counts towards the total: no hidden/ignore-file pruning,
        // and symlinks are reported as leaves instead of being followed.
        builder.standard_filters(false);
        builder.follow_links(false);

        for result in builder.build() {
            match result {
                Ok(entry) if entry.depth() == 0 => {}
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    trace!("walk: {}", entry.path().display());
                    visit(WalkEntry { kind: entry_kind(file_type), path: entry.into_path() });
                }
                Err(err) => on_error(walk_error(root, err)),
            }
        }
    }
}

fn walk_error(root: &Path, err: ignore::Error) -> WalkError {
    let path = error_path(&err).map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let message = err.to_string();
    let source = err.into_io_error().unwrap_or_else(|| io::Error::other(message));
    WalkError { path, source }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        _ => None,
    }
}
