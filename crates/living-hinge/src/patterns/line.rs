//! Line pattern - a single vertical slot per cell.
//!
//! The lattice engine never clips these cells one by one; it hands the
//! whole pattern to the scanline fast path in [`crate::scanline`].

use crate::curve::Primitive;
use crate::geometry::Bounds;

use super::{half_step_offset, CellConfig, PatternInput, StaggerAxis};

/// A vertical segment from the cell origin. Width is ignored.
pub(super) fn cell(_width: f64, height: f64) -> Vec<Primitive> {
    vec![Primitive::polyline(&[(0.0, 0.0), (0.0, height)])]
}

/// Slot height is a fraction of the shape's bounding-box height.
pub(super) fn config(input: &PatternInput, bounds: &Bounds) -> CellConfig {
    let height = input.height * bounds.height();
    CellConfig {
        width: 0.0,
        height,
        x_spacing: input.x_spacing,
        y_spacing: input.y_spacing,
        y_offset: half_step_offset(height, input.y_spacing),
        stagger: StaggerAxis::Columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn single_vertical_slot() {
        let prims = cell(5.0, 8.0);
        assert_eq!(prims, vec![Primitive::Polyline(vec![Point::new(0.0, 0.0), Point::new(0.0, 8.0)])]);
    }

    #[test]
    fn height_is_relative_to_shape() {
        let input = PatternInput { height: 0.8, width: 3.0, x_spacing: 2.0, y_spacing: 2.0 };
        let bounds = Bounds { min_x: 0.0, min_y: 10.0, max_x: 40.0, max_y: 60.0 };
        let config = config(&input, &bounds);
        assert!((config.height - 40.0).abs() < 1e-12);
        assert_eq!(config.width, 0.0);
        assert_eq!(config.x_spacing, 2.0);
        assert!((config.y_offset - 21.0).abs() < 1e-12);
    }
}
