// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::DirectoryEntry;

/// Direction in which entries are ordered by total size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Stable sort on `total_size`; equal sizes keep their enumeration order in both directions.
pub fn sort_by_size(entries: &mut [DirectoryEntry], order: SortOrder) {
    entries.sort_by(|a, b| order.apply(a.total_size.cmp(&b.total_size)));
}
