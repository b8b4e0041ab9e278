//! Cross pattern - two wedges meeting at mid-height, joined by a bar.
//!
//! Cells deliberately overlap horizontally: the configuration rule forces a
//! negative spacing of 40% of the cell width.

use crate::curve::Primitive;

use super::{CellConfig, PatternInput, StaggerAxis};

pub(super) fn cell(width: f64, height: f64) -> Vec<Primitive> {
    let dx = width * 0.1;
    let mid_y = height / 2.0;
    let left_inner = width * 0.25 + dx;
    let right_inner = width * 0.75 - dx;

    vec![
        Primitive::polyline(&[(0.0, 0.0), (left_inner, mid_y), (0.0, height)]),
        Primitive::polyline(&[(left_inner, mid_y), (right_inner, mid_y)]),
        Primitive::polyline(&[(width, 0.0), (right_inner, mid_y), (width, height)]),
    ]
}

/// Spacing inputs are ignored.
pub(super) fn config(input: &PatternInput) -> CellConfig {
    CellConfig {
        width: input.width,
        height: input.height,
        x_spacing: -0.4 * input.width,
        y_spacing: input.height,
        y_offset: input.height,
        stagger: StaggerAxis::Columns,
    }
}
