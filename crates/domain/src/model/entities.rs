pub mod directory_entry;
pub mod listing;

pub use directory_entry::DirectoryEntry;
pub use listing::Listing;
