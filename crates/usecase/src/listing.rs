use std::{io, path::Path};

use dirsize_domain::{
    diagnostics::{Diagnostic, FailureClass, FailureSite},
    model::{DirectoryEntry, Listing},
    value_objects::FilePath,
};
use dirsize_ports::{
    filesystem::{EntryKind, FileSystem},
    identity::IdentityResolver,
};
use dirsize_shared_kernel::{ApplicationError, ApplicationResult, InfrastructureError};
use log::debug;

use crate::{dto::ListingRequest, size::SizeAccumulator};

/// Lists the immediate children of a directory, sized and sorted.
pub struct BuildListing<'a> {
    fs: &'a dyn FileSystem,
    identity: &'a dyn IdentityResolver,
}

impl<'a> BuildListing<'a> {
    pub fn new(fs: &'a dyn FileSystem, identity: &'a dyn IdentityResolver) -> Self {
        Self { fs, identity }
    }

    /// Fails only when the requested directory itself cannot be listed; every
    /// per-entry problem ends up in [`Listing::diagnostics`].
    pub fn run(&self, request: &ListingRequest) -> ApplicationResult<Listing> {
        let root = request.root.as_path();
        self.fs
            .symlink_metadata(root)
            .map_err(|err| root_failure(root, "stat", err))?;
        let children = self.fs.read_dir(root).map_err(|err| root_failure(root, "read_dir", err))?;

        let accumulator = SizeAccumulator::new(self.fs);
        let mut listing = Listing::new();
        for path in children {
            if let Some(entry) = self.describe(&path, &accumulator, &mut listing) {
                listing.push(entry);
            }
        }

        listing.sort(request.order);
        Ok(listing)
    }

    fn describe(&self, path: &Path, accumulator: &SizeAccumulator<'_>, listing: &mut Listing) -> Option<DirectoryEntry> {
        let meta = match self.fs.symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) => {
                debug!("skipping {}: {}", path.display(), err);
                listing.extend_diagnostics(Diagnostic::for_failure(FailureSite::File, path, &err));
                return None;
            }
        };

        let mut name = display_name(path);
        if meta.kind == EntryKind::Symlink {
            match self.fs.read_link(path) {
                Ok(target) => name = format!("{name} -> {}", target.display()),
                Err(err) => listing.extend_diagnostics(Diagnostic::for_failure(FailureSite::File, path, &err)),
            }
        }

        let owner = self.identity.user_name(meta.uid).unwrap_or_else(|| meta.uid.to_string());
        let group = self.identity.group_name(meta.gid).unwrap_or_else(|| meta.gid.to_string());

        let report = accumulator.compute_total_size(path);
        debug!("{} -> {} bytes", path.display(), report.total);
        listing.extend_diagnostics(report.diagnostics);

        Some(DirectoryEntry {
            name,
            path: FilePath::from(path),
            total_size: report.total,
            mode: meta.mode,
            owner,
            group,
            modified_at: meta.modified,
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn root_failure(root: &Path, operation: &str, source: io::Error) -> ApplicationError {
    debug_assert_eq!(FailureClass::classify(FailureSite::Root, source.kind()), FailureClass::Fatal);
    if source.kind() == io::ErrorKind::NotFound {
        ApplicationError::InvalidPath { path: root.to_path_buf() }
    } else {
        ApplicationError::ListingFailed {
            path: root.to_path_buf(),
            source: InfrastructureError::file_system(operation, root, source),
        }
    }
}
