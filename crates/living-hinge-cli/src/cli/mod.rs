//! CLI command implementations.
//!
//! - `fill` - Cut a living hinge pattern into every shape of an SVG
//! - `patterns` - List available patterns

pub mod common;
pub mod fill;
pub mod patterns;
pub mod recipe;
pub mod units;

pub use fill::{cmd_fill, FillArgs};
pub use patterns::cmd_patterns;
