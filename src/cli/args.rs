// src/cli/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirsize",
    version = crate::VERSION,
    about = "Prints out directory listing sorted by total recursive size for directories."
)]
pub struct Args {
    /// Include more columns in output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Reverse the sort order to put big stuff at the top.
    #[arg(short, long)]
    pub reverse: bool,

    /// Optional. The starting path. Current directory if not specified.
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,
}
