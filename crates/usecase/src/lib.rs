//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`size`]: the Size Accumulator, a best-effort recursive size walk
//! - [`listing`]: the Listing Builder, which sizes and sorts a directory's children
//! - [`dto`]: request/response types at the use case boundary
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod listing;
pub mod size;


pub use dto::{ListingRequest, SizeReport};
pub use listing::BuildListing;
pub use size::SizeAccumulator;
