// src/bootstrap.rs
use std::io::{self, Write};

use dirsize_infra::{LocalFileSystem, SystemIdentity};
use dirsize_shared_kernel::{ErrorContext, Result};
use dirsize_usecase::{BuildListing, ListingRequest};
use log::debug;

use crate::{cli, config::Config, presentation};

pub fn run() -> Result<()> {
    let config = cli::load_config();
    run_with_config(&config)
}

/// Builds the listing for `config.root` and prints it to stdout.
pub fn run_with_config(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to_writer(config, &mut out)
}

pub fn run_to_writer<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    debug!("listing {} ({:?})", config.root.display(), config.order);

    let fs = LocalFileSystem::new();
    let identity = SystemIdentity::new();
    let request = ListingRequest { root: config.root.clone(), order: config.order };
    let listing = BuildListing::new(&fs, &identity).run(&request)?;

    debug!("{} entries, {} diagnostics", listing.len(), listing.diagnostics.len());
    presentation::write_report(out, &config.root, &listing, config.verbose)
        .and_then(|()| out.flush())
        .context("writing listing")
}
