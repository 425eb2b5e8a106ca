//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: directory listing, stat, symlink targets and recursive walks
//! - [`identity`]: numeric owner/group IDs to display names
//!
//! These ports allow the use cases to be exercised against in-memory fakes.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;
