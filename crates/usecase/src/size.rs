use std::{cell::RefCell, io, path::Path};

use dirsize_domain::{
    diagnostics::{Diagnostic, FailureSite},
    value_objects::FileSize,
};
use dirsize_ports::filesystem::{EntryKind, EntryMetadata, FileSystem, WalkEntry, WalkError};
use log::{debug, trace};

use crate::dto::SizeReport;

/// Computes the total size of a path, absorbing every failure below it.
///
/// A regular file counts its own length. A directory counts every regular file
/// found at any depth beneath it. A symlink met inside the walk counts the
/// length of the regular file it points at; links to directories are never
/// descended into and add nothing, and dangling links are skipped. Failures
/// never propagate: they either become a [`Diagnostic`] in the returned report
/// or are dropped silently, and the affected path simply contributes zero.
pub struct SizeAccumulator<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> SizeAccumulator<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn compute_total_size(&self, path: &Path) -> SizeReport {
        match self.fs.symlink_metadata(path) {
            Ok(meta) => match meta.kind {
                EntryKind::File => SizeReport::new(FileSize::new(meta.len), Vec::new()),
                EntryKind::Directory => self.accumulate_tree(path),
                EntryKind::Symlink | EntryKind::Other => unknown_item(path),
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => unknown_item(path),
            Err(err) => {
                let diagnostics = Diagnostic::for_failure(FailureSite::File, path, &err);
                SizeReport::new(FileSize::zero(), diagnostics.into_iter().collect())
            }
        }
    }

    fn accumulate_tree(&self, root: &Path) -> SizeReport {
        let mut total = FileSize::zero();
        let diagnostics = RefCell::new(Vec::new());

        self.fs.walk(
            root,
            &mut |entry: WalkEntry| {
                let stat = match entry.kind {
                    EntryKind::File => self.fs.symlink_metadata(&entry.path),
                    EntryKind::Symlink => self.fs.metadata(&entry.path),
                    EntryKind::Directory | EntryKind::Other => return,
                };
                match regular_file_size(&entry.path, stat) {
                    Ok(size) => total = total.saturating_add(size),
                    Err(diagnostic) => diagnostics.borrow_mut().extend(diagnostic),
                }
            },
            &mut |err: WalkError| {
                debug!("cannot enter {}: {}", err.path.display(), err.source);
                diagnostics
                    .borrow_mut()
                    .extend(Diagnostic::for_failure(FailureSite::Subdirectory, &err.path, &err.source));
            },
        );

        trace!("{} totals {} bytes", root.display(), total);
        SizeReport::new(total, diagnostics.into_inner())
    }
}

/// Size of one file met during a walk. `Err(None)` means the file is skipped without a word.
fn regular_file_size(path: &Path, stat: io::Result<EntryMetadata>) -> Result<FileSize, Option<Diagnostic>> {
    match stat {
        Ok(meta) if meta.kind == EntryKind::File => Ok(FileSize::new(meta.len)),
        Ok(meta) => {
            trace!("{} is {:?}, not counted", path.display(), meta.kind);
            Err(None)
        }
        Err(err) => {
            trace!("cannot stat {}: {}", path.display(), err);
            Err(Diagnostic::for_failure(FailureSite::File, path, &err))
        }
    }
}

fn unknown_item(path: &Path) -> SizeReport {
    SizeReport::new(FileSize::zero(), vec![Diagnostic::UnknownItemType { path: path.to_path_buf() }])
}
