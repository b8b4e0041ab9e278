//! # living-hinge
//!
//! Lattice tiling and clipping engine for living hinge kerf patterns.
//!
//! A closed region (one or more contours, even-odd rule) is covered with a
//! repeating cell pattern; every stroke is trimmed to the region's interior
//! and returned grouped per cell.
//!
//! ```ignore
//! let set = PolygonSet::from_rings(vec![outline]);
//! let bounds = set.bounds().unwrap();
//! let kind = PatternKind::Fishbone;
//! let config = HingeConfig::for_pattern(kind, &kind.default_input(), &bounds)?;
//! let groups = generate_hinge(&set, &config)?;
//! ```
//!
//! ## Rust Lesson #7: Borrowing In, Owning Out
//!
//! `generate_hinge` only borrows the polygon set and the config (`&T`), and
//! hands back an owned `Vec<SegmentGroup>`. Nothing is cached between
//! calls, so the same `PolygonSet` can be filled from several threads at
//! once without locks: shared references to plain data are `Sync`.

pub mod clip;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod lattice;
pub mod patterns;
pub mod scanline;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use clip::{clip_segment, contains, segment_intersections};
pub use curve::{Primitive, SampleSteps};
pub use error::HingeError;
pub use geometry::{Bounds, Point, Polygon, PolygonSet, Segment};
pub use lattice::{generate_hinge, AlignedRegion, HingeConfig, SegmentGroup};
pub use patterns::{CellConfig, PatternInput, PatternKind, ShapeParams, StaggerAxis};
pub use svg::{extract_polygon_sets, parse_svg, union_bounds, ShapeRegion, SvgDocument, SvgError};
