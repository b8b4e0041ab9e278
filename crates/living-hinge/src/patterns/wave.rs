//! Wave pattern - flat run, S-bend of two quadratics, flat run.

use crate::curve::Primitive;
use crate::geometry::Point;

use super::{CellConfig, PatternInput, StaggerAxis};

/// Chain from `(0, 0)` to `(width, height)`.
///
/// `param_a` shifts the quadratic control points sideways (fraction of
/// width), `param_b` vertically (fraction of height). Control points are
/// clamped to the cell so the curve never leaves it.
pub(super) fn cell(width: f64, height: f64, param_a: f64, param_b: f64) -> Vec<Primitive> {
    let clamp = |x: f64, y: f64| Point::new(x.clamp(0.0, width), y.clamp(0.0, height));

    let start = Point::new(0.0, 0.0);
    let first = Point::new(width * 0.25, 0.0);
    let mid = Point::new(width * 0.5, height * 0.5);
    let last = Point::new(width * 0.75, height);
    let end = Point::new(width, height);

    vec![
        Primitive::Polyline(vec![start, first]),
        Primitive::Quadratic {
            from: first,
            ctrl: clamp(width * (0.5 + param_a), height * param_b),
            to: mid,
        },
        Primitive::Quadratic {
            from: mid,
            ctrl: clamp(width * (0.5 - param_a), height * (1.0 - param_b)),
            to: last,
        },
        Primitive::Polyline(vec![last, end]),
    ]
}

/// Cells overlap by a fifth of their width and stack without a gap.
pub(super) fn config(input: &PatternInput) -> CellConfig {
    CellConfig {
        width: input.width,
        height: input.height,
        x_spacing: -0.2 * input.width,
        y_spacing: 0.0,
        y_offset: 0.5 * input.height,
        stagger: StaggerAxis::Columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_is_continuous() {
        let prims = cell(8.0, 12.0, 0.1, 0.2);
        assert_eq!(prims.len(), 4);
        let steps = crate::curve::SampleSteps::default();
        let pieces: Vec<_> = prims.iter().map(|p| p.flatten(steps)).collect();
        for w in pieces.windows(2) {
            let a = *w[0].last().unwrap();
            let b = w[1][0];
            assert!(a.distance(b) < 1e-9, "gap between {:?} and {:?}", a, b);
        }
        assert_eq!(pieces[0][0], Point::new(0.0, 0.0));
        assert_eq!(*pieces[3].last().unwrap(), Point::new(8.0, 12.0));
    }

    #[test]
    fn large_amplitude_is_clamped() {
        let prims = cell(8.0, 12.0, 2.0, -1.0);
        let Primitive::Quadratic { ctrl, .. } = prims[1] else {
            panic!("expected a quadratic");
        };
        assert_eq!(ctrl, Point::new(8.0, 0.0));
    }

    #[test]
    fn config_overlaps_cells() {
        let config = config(&PatternInput { height: 10.0, width: 5.0, x_spacing: 3.0, y_spacing: 3.0 });
        assert_eq!(config.step_x(), 4.0);
        assert_eq!(config.step_y(), 10.0);
        assert_eq!(config.y_offset, 5.0);
    }
}
