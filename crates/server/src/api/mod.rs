//! HTTP endpoint modules.
//!
//! Each sub-module owns a single responsibility area.

mod health;
mod stats;

pub use health::health;
pub use stats::compute;
