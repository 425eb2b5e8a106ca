// src/logging.rs
use env_logger::{Builder, Env};

/// Routes `log` records to stderr. Silent unless `RUST_LOG` asks for more, so
/// stdout carries only diagnostics and the table.
pub fn init_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("off")).try_init();
}
