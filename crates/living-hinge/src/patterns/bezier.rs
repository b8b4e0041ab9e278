//! Bezier pattern - an arch of two mirrored cubic curves.

use crate::curve::Primitive;
use crate::geometry::Point;

use super::{half_step_offset, CellConfig, PatternInput, StaggerAxis};

/// Arch from `(0, 0)` over `(width / 2, height)` down to `(width, 0)`.
///
/// `anchor_tip` pulls the tangent near the base, `anchor_center` flattens
/// the top; both are fractions of the cell width.
pub(super) fn cell(width: f64, height: f64, anchor_tip: f64, anchor_center: f64) -> Vec<Primitive> {
    let apex = Point::new(width * 0.5, height);
    vec![
        Primitive::Cubic {
            from: Point::new(0.0, 0.0),
            ctrl1: Point::new(width * anchor_tip, 0.0),
            ctrl2: Point::new(width * (0.5 - anchor_center), height),
            to: apex,
        },
        Primitive::Cubic {
            from: apex,
            ctrl1: Point::new(width * (0.5 + anchor_center), height),
            ctrl2: Point::new(width * (1.0 - anchor_tip), 0.0),
            to: Point::new(width, 0.0),
        },
    ]
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
