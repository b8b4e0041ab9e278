//! SVG input - extract fill regions from SVG documents.
//!
//! Uses usvg for complete SVG resolution (CSS, `<rect>`/`<circle>` to path
//! conversion, nested groups), then walks the tree and turns every path
//! into one [`ShapeRegion`].
//!
//! ## Curve Flattening
//!
//! Input paths contain Bézier curves; the engine only understands straight
//! contours. Curves are flattened with lyon_geom at a fixed tolerance and
//! the element's absolute transform is applied to every vertex.

use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};
use thiserror::Error;
use tracing::debug;
use usvg::tiny_skia_path::PathSegment;

use crate::geometry::{Bounds, Point, PolygonSet};

/// Maximum distance between a flattened curve and the true curve, in user units.
const CURVE_TOLERANCE: f32 = 0.25;

/// Error type for SVG input.
///
/// ## Rust Lesson #20: Error Handling
///
/// `thiserror` derives `Display` and `std::error::Error` from the
/// `#[error(...)]` attributes, so callers can `?` these straight into an
/// `anyhow::Result`.
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("SVG parse error: {0}")]
    Parse(String),

    #[error("no closed shapes found in SVG")]
    NoShapes,
}

/// One SVG element as a fill target.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRegion {
    /// Element `id`, if the document gave it one.
    pub id: Option<String>,
    /// Every closed sub-path of the element, in document coordinates.
    pub polygons: PolygonSet,
}

impl ShapeRegion {
    pub fn bounds(&self) -> Option<Bounds> {
        self.polygons.bounds()
    }
}

/// Bounding box over several regions, `None` if all are empty.
pub fn union_bounds(regions: &[ShapeRegion]) -> Option<Bounds> {
    regions
        .iter()
        .filter_map(ShapeRegion::bounds)
        .reduce(|a, b| a.union(&b))
}

/// A parsed document: its size and every fill region.
///
/// Coordinates are document pixels (96 per inch) with the viewBox already
/// applied, so physical lengths convert the same way in every document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<ShapeRegion>,
}

/// Parse an SVG document and collect every path as a fill region.
///
/// ## Rust Lesson #21: The ? Operator
///
/// `expression?` returns early with the error (converted via `From`) and
/// otherwise unwraps the value. Here the usvg error is first turned into
/// our own variant with `map_err`.
pub fn parse_svg(svg_content: &str) -> Result<SvgDocument, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| SvgError::Parse(e.to_string()))?;

    let mut shapes = Vec::new();
    extract_from_group(tree.root(), &mut shapes);

    debug!(shapes = shapes.len(), "extracted SVG shapes");
    if shapes.is_empty() {
        return Err(SvgError::NoShapes);
    }

    let size = tree.size();
    Ok(SvgDocument {
        width: size.width() as f64,
        height: size.height() as f64,
        shapes,
    })
}

/// Extract every path of an SVG document as a fill region.
pub fn extract_polygon_sets(svg_content: &str) -> Result<Vec<ShapeRegion>, SvgError> {
    parse_svg(svg_content).map(|doc| doc.shapes)
}

fn extract_from_group(group: &usvg::Group, regions: &mut Vec<ShapeRegion>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => extract_from_group(group, regions),
            usvg::Node::Path(path) => {
                if let Some(region) = path_to_region(path) {
                    regions.push(region);
                }
            }
            // Text, images
            _ => {}
        }
    }
}

/// Convert a usvg path into a region, one polygon per closed sub-path.
///
/// Returns `None` when no sub-path survives as a usable contour.
fn path_to_region(path: &usvg::Path) -> Option<ShapeRegion> {
    let ts = path.abs_transform();
    let map = |x: f32, y: f32| {
        let (x, y) = (x as f64, y as f64);
        Point::new(
            ts.sx as f64 * x + ts.kx as f64 * y + ts.tx as f64,
            ts.ky as f64 * x + ts.sy as f64 * y + ts.ty as f64,
        )
    };

    let mut rings: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut last = point(0.0f32, 0.0f32);
    let mut subpath_start = last;

    for segment in path.data().segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                if !current.is_empty() {
                    rings.push(std::mem::take(&mut current));
                }
                current.push(map(p.x, p.y));
                last = point(p.x, p.y);
                subpath_start = last;
            }
            PathSegment::LineTo(p) => {
                current.push(map(p.x, p.y));
                last = point(p.x, p.y);
            }
            PathSegment::QuadTo(ctrl, p) => {
                let curve = QuadraticBezierSegment {
                    from: last,
                    ctrl: point(ctrl.x, ctrl.y),
                    to: point(p.x, p.y),
                };
                curve.for_each_flattened(CURVE_TOLERANCE, &mut |line| {
                    current.push(map(line.to.x, line.to.y));
                });
                last = point(p.x, p.y);
            }
            PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                let curve = CubicBezierSegment {
                    from: last,
                    ctrl1: point(ctrl1.x, ctrl1.y),
                    ctrl2: point(ctrl2.x, ctrl2.y),
                    to: point(p.x, p.y),
                };
                curve.for_each_flattened(CURVE_TOLERANCE, &mut |line| {
                    current.push(map(line.to.x, line.to.y));
                });
                last = point(p.x, p.y);
            }
            PathSegment::Close => {
                if !current.is_empty() {
                    rings.push(std::mem::take(&mut current));
                }
                last = subpath_start;
            }
        }
    }
    if !current.is_empty() {
        rings.push(current);
    }

    let polygons = PolygonSet::from_rings(rings);
    if polygons.is_empty() {
        debug!(id = path.id(), "skipping path without a usable contour");
        return None;
    }

    let id = path.id();
    Some(ShapeRegion {
        id: (!id.is_empty()).then(|| id.to_string()),
        polygons,
    })
}

// ============================================================================
// TESTS
// ============================================================================
