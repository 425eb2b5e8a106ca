//! Failure classification and the non-fatal diagnostics produced while sizing entries.

use std::{
    fmt, io,
    path::{Path, PathBuf},
};

/// Where in the listing a filesystem failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSite {
    /// The directory the listing was requested for.
    Root,
    /// A single entry being stat'ed: a listed child or a file met during a walk.
    File,
    /// A directory the walk could not open or read.
    Subdirectory,
}

/// How a failure affects the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Abort without producing a listing.
    Fatal,
    /// Record a diagnostic, contribute zero, keep going.
    ReportedRecoverable,
    /// Contribute zero and keep going without a word.
    SilentRecoverable,
}

impl FailureClass {
    /// Permission problems are actionable and get reported; entries vanishing or
    /// changing type mid-scan are ordinary races and stay quiet.
    pub fn classify(site: FailureSite, kind: io::ErrorKind) -> Self {
        match site {
            FailureSite::Root => Self::Fatal,
            FailureSite::Subdirectory => Self::ReportedRecoverable,
            FailureSite::File => match kind {
                io::ErrorKind::NotFound | io::ErrorKind::IsADirectory | io::ErrorKind::NotADirectory => {
                    Self::SilentRecoverable
                }
                _ => Self::ReportedRecoverable,
            },
        }
    }
}

/// A non-fatal, per-item problem met while building a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownItemType { path: PathBuf },
    PermissionDenied { path: PathBuf, message: String },
    Inaccessible { path: PathBuf, message: String },
}

impl Diagnostic {
    /// Builds the diagnostic for a recoverable failure at `site`, or `None` when
    /// the failure is silent. Root failures are never turned into diagnostics.
    pub fn for_failure(site: FailureSite, path: &Path, err: &io::Error) -> Option<Self> {
        match FailureClass::classify(site, err.kind()) {
            FailureClass::ReportedRecoverable => Some(
                if site == FailureSite::File && err.kind() == io::ErrorKind::PermissionDenied {
                    Self::PermissionDenied { path: path.to_path_buf(), message: err.to_string() }
                } else {
                    Self::Inaccessible { path: path.to_path_buf(), message: err.to_string() }
                },
            ),
            FailureClass::SilentRecoverable | FailureClass::Fatal => None,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::UnknownItemType { path }
            | Self::PermissionDenied { path, .. }
            | Self::Inaccessible { path, .. } => path,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItemType { path } => write!(f, "Unknown item type: {}", path.display()),
            Self::PermissionDenied { path, message } => {
                write!(f, "PermissionError accessing {}: {message} (skipped)", path.display())
            }
            Self::Inaccessible { path, message } => write!(f, "Error accessing {}: {message}", path.display()),
        }
    }
}
