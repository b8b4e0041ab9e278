//! Unit-cell pattern library.
//!
//! Each pattern is a pair of pure functions: a cell generator mapping the
//! cell size (and shape parameters) to primitives in the local
//! `[0, width] x [0, height]` frame, and a configuration rule deriving the
//! lattice step, spacing and stagger from user-facing inputs. The set of
//! patterns is closed, so dispatch is a plain `match` on [`PatternKind`].

mod bezier;
mod cross;
mod fabric;
mod fishbone;
mod line;
mod wave;

use serde::{Deserialize, Serialize};

use crate::curve::Primitive;
use crate::error::HingeError;
use crate::geometry::Bounds;

/// Which way alternate lattice lines are shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerAxis {
    /// Every other column is shifted by `y_offset` along y.
    #[default]
    Columns,
    /// Every other row is shifted by `y_offset` along x.
    Rows,
}

/// Resolved cell geometry for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellConfig {
    pub width: f64,
    pub height: f64,
    /// Horizontal spacing between cells. May be negative (overlapping cells).
    pub x_spacing: f64,
    /// Vertical gap between cells. May be negative.
    pub y_spacing: f64,
    /// Stagger distance applied to every other column (or row).
    pub y_offset: f64,
    #[serde(default)]
    pub stagger: StaggerAxis,
}

impl CellConfig {
    /// Horizontal lattice step.
    #[inline]
    pub fn step_x(&self) -> f64 {
        self.width + self.x_spacing
    }

    /// Vertical lattice step.
    #[inline]
    pub fn step_y(&self) -> f64 {
        self.height + self.y_spacing
    }

    /// Reject configurations that cannot tile.
    ///
    /// The cell itself needs a positive height and a non-negative width.
    /// Spacing alone may be negative; only the effective step matters.
    pub fn validate(&self) -> Result<(), HingeError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("x_spacing", self.x_spacing),
            ("y_spacing", self.y_spacing),
            ("y_offset", self.y_offset),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(HingeError::NonFinite(name));
        }
        if self.height <= 0.0 {
            return Err(HingeError::NonPositiveHeight(self.height));
        }
        if self.width < 0.0 {
            return Err(HingeError::NegativeWidth(self.width));
        }

        let (step_x, step_y) = (self.step_x(), self.step_y());
        if step_x <= 0.0 || step_y <= 0.0 {
            return Err(HingeError::NonPositiveStep { step_x, step_y });
        }
        Ok(())
    }
}

/// Pattern-specific shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Bezier: tangent pull near the base, as a fraction of cell width.
    pub anchor_tip: f64,
    /// Bezier: curvature near the apex, as a fraction of cell width.
    pub anchor_center: f64,
    /// Wave: horizontal control-point shift, as a fraction of cell width.
    pub param_a: f64,
    /// Wave: vertical control-point shift, as a fraction of cell height.
    pub param_b: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            anchor_tip: 0.2,
            anchor_center: 0.3,
            param_a: 0.0,
            param_b: 0.0,
        }
    }
}

/// User-facing sizes before a pattern's configuration rule is applied.
///
/// For [`PatternKind::Line`] the `height` is a fraction (0-1) of the target
/// shape's bounding-box height rather than a length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternInput {
    pub height: f64,
    pub width: f64,
    #[serde(default)]
    pub x_spacing: f64,
    #[serde(default)]
    pub y_spacing: f64,
}

/// Available hinge patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Line,
    Fishbone,
    Cross,
    Bezier,
    Wave,
    Fabric,
}

impl PatternKind {
    /// Get all available patterns.
    pub fn all() -> &'static [PatternKind] {
        &[
            PatternKind::Line,
            PatternKind::Fishbone,
            PatternKind::Cross,
            PatternKind::Bezier,
            PatternKind::Wave,
            PatternKind::Fabric,
        ]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Line => "line",
            PatternKind::Fishbone => "fishbone",
            PatternKind::Cross => "cross",
            PatternKind::Bezier => "bezier",
            PatternKind::Wave => "wave",
            PatternKind::Fabric => "fabric",
        }
    }

    /// Brief description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            PatternKind::Line => "Staggered straight slots",
            PatternKind::Fishbone => "Nested V-shaped chevrons",
            PatternKind::Cross => "Overlapping X wedges",
            PatternKind::Bezier => "Rounded arches from mirrored cubic curves",
            PatternKind::Wave => "S-shaped waves built from quadratic curves",
            PatternKind::Fabric => "Interlocking basket weave",
        }
    }

    /// Parse pattern from string.
    pub fn from_name(name: &str) -> Option<PatternKind> {
        match name.to_lowercase().as_str() {
            "line" | "lines" | "straight" => Some(PatternKind::Line),
            "fishbone" | "chevron" | "herringbone" => Some(PatternKind::Fishbone),
            "cross" | "x" => Some(PatternKind::Cross),
            "bezier" | "arch" => Some(PatternKind::Bezier),
            "wave" | "s" => Some(PatternKind::Wave),
            "fabric" | "weave" | "basket" => Some(PatternKind::Fabric),
            _ => None,
        }
    }

    /// Default user inputs for the pattern.
    pub fn default_input(&self) -> PatternInput {
        match self {
            PatternKind::Line => PatternInput { height: 0.8, width: 0.0, x_spacing: 2.0, y_spacing: 2.0 },
            PatternKind::Fishbone | PatternKind::Bezier => {
                PatternInput { height: 10.0, width: 5.0, x_spacing: 2.0, y_spacing: 2.0 }
            }
            PatternKind::Cross | PatternKind::Wave | PatternKind::Fabric => {
                PatternInput { height: 10.0, width: 5.0, x_spacing: 0.0, y_spacing: 0.0 }
            }
        }
    }

    /// Generate the primitives of one cell in local coordinates.
    pub fn cell(&self, width: f64, height: f64, params: &ShapeParams) -> Vec<Primitive> {
        match self {
            PatternKind::Line => line::cell(width, height),
            PatternKind::Fishbone => fishbone::cell(width, height),
            PatternKind::Cross => cross::cell(width, height),
            PatternKind::Bezier => bezier::cell(width, height, params.anchor_tip, params.anchor_center),
            PatternKind::Wave => wave::cell(width, height, params.param_a, params.param_b),
            PatternKind::Fabric => fabric::cell(width, height),
        }
    }

    /// Apply the pattern's configuration rule.
    ///
    /// `bounds` is the bounding box of the target shape in its original
    /// frame; only the line pattern looks at it.
    pub fn derive_config(&self, input: &PatternInput, bounds: &Bounds) -> Result<CellConfig, HingeError> {
        let config = match self {
            PatternKind::Line => line::config(input, bounds),
            PatternKind::Fishbone => fishbone::config(input),
            PatternKind::Cross => cross::config(input),
            PatternKind::Bezier => bezier::config(input),
            PatternKind::Wave => wave::config(input),
            PatternKind::Fabric => fabric::config(input),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Stagger of half a vertical step.
#[inline]
fn half_step_offset(height: f64, y_spacing: f64) -> f64 {
    (height + y_spacing) / 2.0
}
