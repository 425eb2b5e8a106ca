use crate::{
    analytics::sort::{SortOrder, sort_by_size},
    diagnostics::Diagnostic,
    model::{ColumnWidths, DirectoryEntry},
};

/// Entries of one directory, their column widths, and the diagnostics raised while sizing them.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub entries: Vec<DirectoryEntry>,
    pub widths: ColumnWidths,
    pub diagnostics: Vec<Diagnostic>,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and widens the columns to fit it.
    pub fn push(&mut self, entry: DirectoryEntry) {
        self.widths.observe(&entry);
        self.entries.push(entry);
    }

    pub fn extend_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn sort(&mut self, order: SortOrder) {
        sort_by_size(&mut self.entries, order);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
