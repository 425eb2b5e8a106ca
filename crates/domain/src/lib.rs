#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod diagnostics;
pub mod model;
pub mod value_objects;
