// src/presentation.rs
use std::{
    fmt::Write as _,
    io::{self, Write},
    path::Path,
};

use dirsize_domain::model::{ColumnWidths, DirectoryEntry, Listing};
use dirsize_shared_kernel::path::logical_absolute;

/// Fixed part of the verbose underline: size, mode and timestamp columns plus separators.
const VERBOSE_RULE_BASE: usize = 47;
/// Fixed part of the compact underline: size column plus separator.
const COMPACT_RULE_BASE: usize = 14;

/// Writes the verbose preamble, the diagnostics, then the table.
pub fn write_report<W: Write>(out: &mut W, root: &Path, listing: &Listing, verbose: bool) -> io::Result<()> {
    if verbose {
        writeln!(out, "Verbose output is on")?;
        writeln!(out, "Path = {}", logical_absolute(root).display())?;
    }
    for diagnostic in &listing.diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    out.write_all(render_table(listing, verbose).as_bytes())
}

/// Renders header, underline and one row per entry.
pub fn render_table(listing: &Listing, verbose: bool) -> String {
    let widths = &listing.widths;
    let mut table = String::new();

    if verbose {
        let _ = writeln!(
            table,
            "{}",
            verbose_row(widths, ["Size", "Mode", "Owner", "Group", "Last Modified", "Name"])
        );
        let _ = writeln!(table, "{}", "-".repeat(VERBOSE_RULE_BASE + widths.total()));
    } else {
        let _ = writeln!(table, "{}", compact_row(widths, "Size", "Name"));
        let _ = writeln!(table, "{}", "-".repeat(COMPACT_RULE_BASE + widths.name));
    }

    for entry in &listing.entries {
        let _ = writeln!(table, "{}", render_entry(widths, entry, verbose));
    }
    table
}

fn render_entry(widths: &ColumnWidths, entry: &DirectoryEntry, verbose: bool) -> String {
    let size = entry.total_size.to_human();
    if verbose {
        let modified = entry.modified_at.to_string();
        verbose_row(widths, [&size, entry.mode.as_str(), &entry.owner, &entry.group, &modified, &entry.name])
    } else {
        compact_row(widths, &size, &entry.name)
    }
}

fn compact_row(widths: &ColumnWidths, size: &str, name: &str) -> String {
    format!("{size:>12}  {name:<name_w$}", name_w = widths.name)
}

fn verbose_row(widths: &ColumnWidths, [size, mode, owner, group, modified, name]: [&str; 6]) -> String {
    format!(
        "{size:>12}  {mode:<10}  {owner:>owner_w$}:{group:<group_w$}  {modified:<16}  {name:<name_w$}",
        owner_w = widths.owner,
        group_w = widths.group,
        name_w = widths.name,
    )
}
