pub mod sort;

pub use sort::{SortOrder, sort_by_size};
