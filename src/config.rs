// src/config.rs
use std::path::PathBuf;

use dirsize_domain::analytics::SortOrder;

use crate::cli::Args;

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub verbose: bool,
    pub order: SortOrder,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let root = args
            .path
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        Self { root, verbose: args.verbose, order: SortOrder::from(args.reverse) }
    }
}
