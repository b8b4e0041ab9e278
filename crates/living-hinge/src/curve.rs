//! Pattern primitives and fixed-step curve sampling.
//!
//! Cells are described with straight polylines and quadratic/cubic Bézier
//! curves. Before clipping, curves are evaluated at equally spaced
//! parameters. The step count is fixed rather than adaptive: a cell is a few
//! millimetres wide, so a uniform resolution is plenty for a laser path.

use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Default resolution for quadratic curves.
pub const QUADRATIC_STEPS: usize = 12;

/// Default resolution for cubic curves.
pub const CUBIC_STEPS: usize = 20;

/// Number of parameter steps used when flattening curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSteps {
    pub quadratic: usize,
    pub cubic: usize,
}

impl Default for SampleSteps {
    fn default() -> Self {
        Self {
            quadratic: QUADRATIC_STEPS,
            cubic: CUBIC_STEPS,
        }
    }
}

/// One element of a cell's geometry.
///
/// ## Rust Lesson #10: Enums (Sum Types)
///
/// Each variant carries exactly the control points it needs, and
/// `flatten` has to handle all of them - adding a variant without teaching
/// the sampler about it is a compile error.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight polyline through at least two points.
    Polyline(Vec<Point>),
    /// Quadratic Bézier curve.
    Quadratic { from: Point, ctrl: Point, to: Point },
    /// Cubic Bézier curve.
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl Primitive {
    /// Shorthand for a polyline from a slice of coordinate pairs.
    pub fn polyline(points: &[(f64, f64)]) -> Self {
        Primitive::Polyline(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Move the primitive by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Primitive {
        match self {
            Primitive::Polyline(points) => {
                Primitive::Polyline(points.iter().map(|p| p.translate(dx, dy)).collect())
            }
            Primitive::Quadratic { from, ctrl, to } => Primitive::Quadratic {
                from: from.translate(dx, dy),
                ctrl: ctrl.translate(dx, dy),
                to: to.translate(dx, dy),
            },
            Primitive::Cubic { from, ctrl1, ctrl2, to } => Primitive::Cubic {
                from: from.translate(dx, dy),
                ctrl1: ctrl1.translate(dx, dy),
                ctrl2: ctrl2.translate(dx, dy),
                to: to.translate(dx, dy),
            },
        }
    }

    /// Polyline approximation of the primitive.
    pub fn flatten(&self, steps: SampleSteps) -> Vec<Point> {
        match self {
            Primitive::Polyline(points) => points.clone(),
            Primitive::Quadratic { from, ctrl, to } => {
                sample_quadratic(*from, *ctrl, *to, steps.quadratic)
            }
            Primitive::Cubic { from, ctrl1, ctrl2, to } => {
                sample_cubic(*from, *ctrl1, *ctrl2, *to, steps.cubic)
            }
        }
    }
}

/// Evaluate a quadratic Bézier at `steps + 1` evenly spaced parameters.
pub fn sample_quadratic(from: Point, ctrl: Point, to: Point, steps: usize) -> Vec<Point> {
    let curve = QuadraticBezierSegment {
        from: point(from.x, from.y),
        ctrl: point(ctrl.x, ctrl.y),
        to: point(to.x, to.y),
    };
    sample_evenly(steps, |t| {
        let p = curve.sample(t);
        Point::new(p.x, p.y)
    })
}

/// Evaluate a cubic Bézier at `steps + 1` evenly spaced parameters.
pub fn sample_cubic(from: Point, ctrl1: Point, ctrl2: Point, to: Point, steps: usize) -> Vec<Point> {
    let curve = CubicBezierSegment {
        from: point(from.x, from.y),
        ctrl1: point(ctrl1.x, ctrl1.y),
        ctrl2: point(ctrl2.x, ctrl2.y),
        to: point(to.x, to.y),
    };
    sample_evenly(steps, |t| {
        let p = curve.sample(t);
        Point::new(p.x, p.y)
    })
}

fn sample_evenly<F>(steps: usize, eval: F) -> Vec<Point>
where
    F: Fn(f64) -> Point,
{
    let steps = steps.max(1);
    (0..=steps).map(|i| eval(i as f64 / steps as f64)).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn quadratic_hits_endpoints_and_midpoint() {
        let pts = sample_quadratic(
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
            12,
        );
        assert_eq!(pts.len(), 13);
        assert!(close(pts[0], Point::new(0.0, 0.0)));
        assert!(close(pts[12], Point::new(10.0, 0.0)));
        // B(0.5) = 0.25*p0 + 0.5*c + 0.25*p1
        assert!(close(pts[6], Point::new(5.0, 5.0)));
    }

    #[test]
    fn cubic_matches_bernstein_form() {
        let (p0, c1, c2, p1) = (
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.5, 10.0),
            Point::new(2.5, 10.0),
        );
        let pts = sample_cubic(p0, c1, c2, p1, 20);
        assert_eq!(pts.len(), 21);

        for (i, p) in pts.iter().enumerate() {
            let t = i as f64 / 20.0;
            let mt = 1.0 - t;
            let x = mt * mt * mt * p0.x + 3.0 * mt * mt * t * c1.x + 3.0 * mt * t * t * c2.x + t * t * t * p1.x;
            let y = mt * mt * mt * p0.y + 3.0 * mt * mt * t * c1.y + 3.0 * mt * t * t * c2.y + t * t * t * p1.y;
            assert!(close(*p, Point::new(x, y)), "step {} off: {:?}", i, p);
        }
    }

    #[test]
    fn flatten_uses_configured_steps() {
        let quad = Primitive::Quadratic {
            from: Point::new(0.0, 0.0),
            ctrl: Point::new(1.0, 1.0),
            to: Point::new(2.0, 0.0),
        };
        assert_eq!(quad.flatten(SampleSteps::default()).len(), QUADRATIC_STEPS + 1);
        let coarse = SampleSteps { quadratic: 4, cubic: 4 };
        assert_eq!(quad.flatten(coarse).len(), 5);
        let degenerate = SampleSteps { quadratic: 0, cubic: 0 };
        assert_eq!(quad.flatten(degenerate).len(), 2);

        let line = Primitive::polyline(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(line.flatten(SampleSteps::default()).len(), 3);
    }

    #[test]
    fn translate_moves_every_control_point() {
        let cubic = Primitive::Cubic {
            from: Point::new(0.0, 0.0),
            ctrl1: Point::new(1.0, 0.0),
            ctrl2: Point::new(2.0, 1.0),
            to: Point::new(3.0, 1.0),
        };
        let moved = cubic.translate(10.0, -1.0);
        assert_eq!(
            moved,
            Primitive::Cubic {
                from: Point::new(10.0, -1.0),
                ctrl1: Point::new(11.0, -1.0),
                ctrl2: Point::new(12.0, 0.0),
                to: Point::new(13.0, 0.0),
            }
        );
    }
}
