use crate::model::DirectoryEntry;

/// Widest rendered Owner, Group and Name values seen so far, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub owner: usize,
    pub group: usize,
    pub name: usize,
}

impl ColumnWidths {
    pub fn observe(&mut self, entry: &DirectoryEntry) {
        self.owner = self.owner.max(entry.owner.chars().count());
        self.group = self.group.max(entry.group.chars().count());
        self.name = self.name.max(entry.name.chars().count());
    }

    pub fn total(&self) -> usize {
        self.owner + self.group + self.name
    }
}
