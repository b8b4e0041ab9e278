//! Fishbone pattern - one V per cell.

use crate::curve::Primitive;

use super::{half_step_offset, CellConfig, PatternInput, StaggerAxis};

/// Base corners at the bottom of the cell, apex at the top centre.
pub(super) fn cell(width: f64, height: f64) -> Vec<Primitive> {
    vec![Primitive::polyline(&[(0.0, 0.0), (width / 2.0, height), (width, 0.0)])]
}

pub(super) fn config(input: &PatternInput) -> CellConfig {
    CellConfig {
        width: input.width,
        height: input.height,
        x_spacing: input.x_spacing,
        y_spacing: input.y_spacing,
        y_offset: half_step_offset(input.height, input.y_spacing),
        stagger: StaggerAxis::Columns,
    }
}
