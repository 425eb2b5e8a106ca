pub mod column_widths;

pub use column_widths::ColumnWidths;
