mod args;

use crate::config::Config;
use clap::Parser;

pub use args::Args;

/// Parse CLI arguments and materialise a [`Config`].
pub fn load_config() -> Config {
    Config::from(Args::parse())
}
