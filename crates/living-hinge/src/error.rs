//! Error types for hinge generation.
//!
//! Every variant is a configuration problem detected before the lattice
//! sweep starts; nothing here is transient or worth retrying.

use thiserror::Error;

/// Errors returned by [`crate::generate_hinge`] and config derivation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HingeError {
    /// Cell width + spacing or cell height + gap is zero or negative.
    #[error("cell step must be positive in both axes (x step = {step_x}, y step = {step_y})")]
    NonPositiveStep { step_x: f64, step_y: f64 },

    /// Derived cell height is zero or negative.
    #[error("height must be greater than zero (got {0})")]
    NonPositiveHeight(f64),

    /// Derived cell width is negative.
    #[error("width must not be negative (got {0})")]
    NegativeWidth(f64),

    /// A parameter is NaN or infinite.
    #[error("parameter `{0}` must be a finite number")]
    NonFinite(&'static str),

    /// The fill would exceed the caller's cell ceiling. For the line pattern
    /// `cells` is where counting stopped, one past the limit.
    #[error("pattern needs at least {cells} cells, more than the limit of {limit}")]
    TooManyCells { cells: usize, limit: usize },
}
