use std::path::PathBuf;

use dirsize_domain::{analytics::SortOrder, diagnostics::Diagnostic, value_objects::FileSize};

/// Input of [`crate::BuildListing::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub root: PathBuf,
    pub order: SortOrder,
}

/// Result of sizing one path: the reachable total plus whatever went wrong on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeReport {
    pub total: FileSize,
    pub diagnostics: Vec<Diagnostic>,
}

impl SizeReport {
    pub fn new(total: FileSize, diagnostics: Vec<Diagnostic>) -> Self {
        Self { total, diagnostics }
    }
}
