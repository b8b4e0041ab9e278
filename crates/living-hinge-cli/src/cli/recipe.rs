//! Hinge recipes - reusable fill settings in YAML.
//!
//! A recipe captures everything `fill` would otherwise take from flags, so a
//! tuned hinge can be kept next to the design it belongs to. Flags given on
//! the command line win over recipe values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::common::OutputFormat;

/// Fill settings loaded from a YAML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HingeRecipe {
    /// Recipe name, for logs only.
    pub name: Option<String>,

    /// Pattern name or alias (e.g. "fishbone", "weave").
    pub pattern: Option<String>,

    /// Unit for every length below (default: mm).
    pub units: Option<String>,

    /// Pattern rotation in degrees.
    pub angle: Option<f64>,

    /// Cell height; percent of the shape height for the line pattern.
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub x_spacing: Option<f64>,
    pub y_spacing: Option<f64>,

    pub anchor_tip: Option<f64>,
    pub anchor_center: Option<f64>,
    pub param_a: Option<f64>,
    pub param_b: Option<f64>,

    pub max_cells: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl HingeRecipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("failed to parse recipe {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

/// Printed by `living-hinge fill --example-recipe`.
pub const EXAMPLE_RECIPE: &str = r##"# Example living-hinge recipe
name: "Lid bend"
pattern: bezier
units: mm
angle: 0

# Cell size and spacing, in `units`
height: 12
width: 6
x_spacing: 2
y_spacing: 2

# Bezier shape
anchor_tip: 0.2
anchor_center: 0.3

# Refuse absurdly dense fills
max_cells: 200000
format: svg
"##;
