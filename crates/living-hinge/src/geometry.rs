//! Core geometry types for living-hinge.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Debug, Clone, Copy, PartialEq)]` gives small value types
//! printing, cheap copies and `==` for free. `Point` and `Segment` are plain
//! data; `Polygon` and `PolygonSet` own their vertices in a `Vec`.

use serde::{Deserialize, Serialize};

/// Tolerance below which two consecutive contour points are the same point.
const DUPLICATE_EPSILON: f64 = 1e-9;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A straight segment between two points. The atomic unit of clipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// One closed contour of a shape.
///
/// The ring is always explicitly closed: the first point is repeated as the
/// last one, so edges are simply `points[i]..points[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

/// A set of contours evaluated together under the even-odd rule.
///
/// Several sub-paths of one shape, or several disjoint shapes, live in one
/// set. Overlapping contours cancel each other out (holes).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at parameter `t` on the way from `self` to `other`.
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.start.lerp(self.end, 0.5)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.start.x.min(self.end.x),
            min_y: self.start.y.min(self.end.y),
            max_x: self.start.x.max(self.end.x),
            max_y: self.start.y.max(self.end.y),
        }
    }
}

impl Bounds {
    /// Bounding box of a sequence of points, `None` when it is empty.
    pub fn from_points<'a, I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(iter.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// True when the two boxes share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        !(other.max_x < self.min_x
            || other.min_x > self.max_x
            || other.max_y < self.min_y
            || other.min_y > self.max_y)
    }
}

impl Polygon {
    /// Build a closed contour from flattened points.
    ///
    /// Consecutive duplicates are dropped and the ring is closed if the
    /// caller left it open. Returns `None` for contours with fewer than
    /// three usable points; those are skipped rather than treated as errors.
    pub fn closed(points: Vec<Point>) -> Option<Polygon> {
        let mut points = points;
        points.dedup_by(|a, b| {
            (a.x - b.x).abs() < DUPLICATE_EPSILON && (a.y - b.y).abs() < DUPLICATE_EPSILON
        });

        // Strip an explicit closing point so it is not counted as usable.
        if points.len() >= 2 {
            let first = points[0];
            let last = points[points.len() - 1];
            if (first.x - last.x).abs() < DUPLICATE_EPSILON
                && (first.y - last.y).abs() < DUPLICATE_EPSILON
            {
                points.pop();
            }
        }

        if points.len() < 3 {
            return None;
        }

        points.push(points[0]);
        Some(Polygon { points })
    }

    /// All ring points, closing point included.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the ring's edges as `(a, b)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn bounds(&self) -> Bounds {
        // A closed polygon always has at least four points.
        Bounds::from_points(&self.points).unwrap_or(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        })
    }

    /// Apply a point mapping to every vertex.
    pub fn map_points<F>(&self, f: F) -> Polygon
    where
        F: Fn(Point) -> Point,
    {
        Polygon {
            points: self.points.iter().map(|&p| f(p)).collect(),
        }
    }
}

impl PolygonSet {
    /// Build a set from raw flattened contours, skipping degenerate ones.
    pub fn from_rings<I>(rings: I) -> Self
    where
        I: IntoIterator<Item = Vec<Point>>,
    {
        Self {
            polygons: rings.into_iter().filter_map(Polygon::closed).collect(),
        }
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Iterate over every edge of every contour.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.polygons.iter().flat_map(|p| p.edges())
    }

    /// Bounding box over all contours, `None` for an empty set.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.polygons.iter().flat_map(|p| p.points.iter()))
    }

    /// Centre of the bounding box. This is the pivot for pattern rotation.
    pub fn center(&self) -> Option<Point> {
        self.bounds().map(|b| b.center())
    }

    /// Apply a point mapping to every vertex of every contour.
    pub fn map_points<F>(&self, f: F) -> PolygonSet
    where
        F: Fn(Point) -> Point,
    {
        PolygonSet {
            polygons: self.polygons.iter().map(|p| p.map_points(&f)).collect(),
        }
    }

    /// Even-odd containment test. See [`crate::clip::contains`].
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        crate::clip::contains(self, pt)
    }
}

// ============================================================================
// TESTS
// ============================================================================
