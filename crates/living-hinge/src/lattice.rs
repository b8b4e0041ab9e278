//! Lattice engine: sweeps a pattern cell over a shape and clips every stroke.
//!
//! A generation call rotates the shape into the pattern's frame once
//! ([`AlignedRegion`]), walks a staggered grid of cell origins over the
//! aligned bounding box ([`Lattice`]), clips each cell's strokes against the
//! aligned contours and rotates the survivors back.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clip::clip_segment;
use crate::curve::{Primitive, SampleSteps};
use crate::error::HingeError;
use crate::geometry::{Bounds, Point, PolygonSet, Segment};
use crate::patterns::{CellConfig, PatternInput, PatternKind, ShapeParams, StaggerAxis};
use crate::scanline::{line_slots, SlotLayout};

/// Slack on the far sweep limit so a cell landing exactly on it is kept.
const SWEEP_SLACK: f64 = 0.001;

// ============================================================================
// ROTATION
// ============================================================================

/// A 2D rotation around a pivot point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTransform {
    pub center: Point,
    pub cos_a: f64,
    pub sin_a: f64,
}

impl RotationTransform {
    pub fn new(center: Point, angle_rad: f64) -> Self {
        Self {
            center,
            cos_a: angle_rad.cos(),
            sin_a: angle_rad.sin(),
        }
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            center: self.center,
            cos_a: self.cos_a,
            sin_a: -self.sin_a,
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        Point::new(
            self.center.x + dx * self.cos_a - dy * self.sin_a,
            self.center.y + dx * self.sin_a + dy * self.cos_a,
        )
    }

    #[inline]
    pub fn apply_segment(&self, seg: Segment) -> Segment {
        Segment::new(self.apply(seg.start), self.apply(seg.end))
    }
}

// ============================================================================
// ALIGNED REGION
// ============================================================================

/// The target shape rotated into the pattern's frame.
///
/// Built once per generation call and only read afterwards. The pattern is
/// laid out axis-aligned in this frame; [`AlignedRegion::restore`] maps
/// results back to the caller's frame.
#[derive(Debug, Clone)]
pub struct AlignedRegion {
    polygons: PolygonSet,
    bounds: Bounds,
    to_original: RotationTransform,
}

impl AlignedRegion {
    /// Rotate `set` by `-angle_rad` about its bounding-box centre.
    ///
    /// The angle is taken modulo a full turn. Returns `None` for an empty set.
    pub fn new(set: &PolygonSet, angle_rad: f64) -> Option<Self> {
        let center = set.center()?;
        let angle = angle_rad.rem_euclid(TAU);

        let to_original = RotationTransform::new(center, angle);
        let to_aligned = to_original.inverse();
        let polygons = set.map_points(|p| to_aligned.apply(p));
        let bounds = polygons.bounds()?;

        Some(Self {
            polygons,
            bounds,
            to_original,
        })
    }

    #[inline]
    pub fn polygons(&self) -> &PolygonSet {
        &self.polygons
    }

    /// Bounding box of the aligned contours.
    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Clip an aligned-frame segment, returning aligned-frame pieces.
    ///
    /// Segments whose box misses the region's box are dropped without
    /// touching any edge.
    pub fn clip(&self, p0: Point, p1: Point) -> Vec<Segment> {
        if !Segment::new(p0, p1).bounds().overlaps(&self.bounds) {
            return Vec::new();
        }
        clip_segment(p0, p1, &self.polygons)
    }

    /// Map an aligned-frame segment back into the original frame.
    #[inline]
    pub fn restore(&self, seg: Segment) -> Segment {
        self.to_original.apply_segment(seg)
    }
}

// ============================================================================
// LATTICE
// ============================================================================

/// Number of origins `start + i * step` (i >= 0) that do not exceed `limit`.
///
/// Origins are computed by multiplication so the count matches what a sweep
/// visiting them one by one would produce.
pub(crate) fn origin_count(start: f64, limit: f64, step: f64) -> usize {
    if !(limit >= start) || !(step > 0.0) {
        return 0;
    }
    let span = ((limit - start) / step).floor();
    if span >= usize::MAX as f64 {
        return usize::MAX;
    }
    let mut n = span as usize + 1;
    while start + n as f64 * step <= limit {
        n += 1;
    }
    while n > 0 && start + (n - 1) as f64 * step > limit {
        n -= 1;
    }
    n
}

/// One lattice position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    pub column: usize,
    pub row: usize,
    /// Bottom-left corner of the cell in the aligned frame.
    pub origin: Point,
}

/// Staggered grid of cell origins covering a bounding box.
///
/// The sweep starts one step before the box and ends one step past it, so
/// cells straddling the border are always generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    start: Point,
    limit: Point,
    step_x: f64,
    step_y: f64,
    offset: f64,
    stagger: StaggerAxis,
}

impl Lattice {
    pub fn new(bounds: &Bounds, cell: &CellConfig) -> Self {
        let (step_x, step_y) = (cell.step_x(), cell.step_y());
        Self {
            start: Point::new(bounds.min_x - step_x, bounds.min_y - step_y),
            limit: Point::new(
                bounds.max_x + step_x + SWEEP_SLACK,
                bounds.max_y + step_y + SWEEP_SLACK,
            ),
            step_x,
            step_y,
            offset: cell.y_offset,
            stagger: cell.stagger,
        }
    }

    /// `(start, limit, step)` of the staggered axis, then of the other one.
    fn axes(&self) -> ((f64, f64, f64), (f64, f64, f64)) {
        let x = (self.start.x, self.limit.x, self.step_x);
        let y = (self.start.y, self.limit.y, self.step_y);
        match self.stagger {
            StaggerAxis::Columns => (x, y),
            StaggerAxis::Rows => (y, x),
        }
    }

    /// Number of lattice lines along the staggered axis (columns or rows).
    pub fn lines(&self) -> usize {
        let ((start, limit, step), _) = self.axes();
        origin_count(start, limit, step)
    }

    /// Total number of cells the sweep visits.
    pub fn cell_count(&self) -> usize {
        let lines = self.lines();
        let (_, (start, limit, step)) = self.axes();
        let even = origin_count(start, limit, step);
        let odd = origin_count(start + self.offset, limit, step);
        lines
            .div_ceil(2)
            .saturating_mul(even)
            .saturating_add((lines / 2).saturating_mul(odd))
    }

    /// Visit every cell in sweep order.
    ///
    /// Column stagger sweeps column by column, bottom to top; row stagger
    /// sweeps row by row, left to right.
    pub fn cells(&self) -> impl Iterator<Item = LatticeCell> + '_ {
        let ((major_start, _, major_step), (minor_start, minor_limit, minor_step)) = self.axes();

        (0..self.lines()).flat_map(move |i| {
            let shift = if i % 2 == 1 { self.offset } else { 0.0 };
            let major = major_start + i as f64 * major_step;
            let first = minor_start + shift;

            (0..origin_count(first, minor_limit, minor_step)).map(move |j| {
                let minor = first + j as f64 * minor_step;
                match self.stagger {
                    StaggerAxis::Columns => LatticeCell {
                        column: i,
                        row: j,
                        origin: Point::new(major, minor),
                    },
                    StaggerAxis::Rows => LatticeCell {
                        column: j,
                        row: i,
                        origin: Point::new(minor, major),
                    },
                }
            })
        })
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// The clipped strokes of one cell (or one slot of the line pattern), in the
/// original frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentGroup {
    pub column: usize,
    pub row: usize,
    pub segments: Vec<Segment>,
}

/// Everything one generation call needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HingeConfig {
    pub pattern: PatternKind,
    pub cell: CellConfig,
    #[serde(default)]
    pub shape: ShapeParams,
    /// Pattern rotation in radians, counter-clockwise in the shape's frame.
    #[serde(default)]
    pub angle_rad: f64,
    #[serde(default)]
    pub steps: SampleSteps,
    /// Refuse to sweep more cells than this.
    #[serde(default)]
    pub max_cells: Option<usize>,
}

impl HingeConfig {
    pub fn new(pattern: PatternKind, cell: CellConfig) -> Self {
        Self {
            pattern,
            cell,
            shape: ShapeParams::default(),
            angle_rad: 0.0,
            steps: SampleSteps::default(),
            max_cells: None,
        }
    }

    /// Derive the cell from user inputs with the pattern's configuration rule.
    pub fn for_pattern(
        pattern: PatternKind,
        input: &PatternInput,
        bounds: &Bounds,
    ) -> Result<Self, HingeError> {
        let cell = pattern.derive_config(input, bounds)?;
        Ok(Self::new(pattern, cell))
    }

    pub fn with_angle(mut self, angle_rad: f64) -> Self {
        self.angle_rad = angle_rad;
        self
    }

    pub fn with_shape(mut self, shape: ShapeParams) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_max_cells(mut self, max_cells: Option<usize>) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub fn validate(&self) -> Result<(), HingeError> {
        self.cell.validate()?;
        let scalars = [
            ("angle_rad", self.angle_rad),
            ("anchor_tip", self.shape.anchor_tip),
            ("anchor_center", self.shape.anchor_center),
            ("param_a", self.shape.param_a),
            ("param_b", self.shape.param_b),
        ];
        if let Some(&(name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(HingeError::NonFinite(name));
        }
        Ok(())
    }

    fn check_ceiling(&self, cells: usize) -> Result<(), HingeError> {
        match self.max_cells {
            Some(limit) if cells > limit => Err(HingeError::TooManyCells { cells, limit }),
            _ => Ok(()),
        }
    }
}

/// Fill `set` with the configured pattern.
///
/// The configuration is checked before any geometry is produced. An empty
/// set yields no groups. Groups come back in sweep order, one per non-empty
/// cell, with every segment inside the region and in the caller's frame.
pub fn generate_hinge(set: &PolygonSet, config: &HingeConfig) -> Result<Vec<SegmentGroup>, HingeError> {
    config.validate()?;

    let Some(region) = AlignedRegion::new(set, config.angle_rad) else {
        debug!("empty polygon set, nothing to fill");
        return Ok(Vec::new());
    };

    if config.pattern == PatternKind::Line {
        let layout = SlotLayout::from_cell(&config.cell);
        if let Some(limit) = config.max_cells {
            config.check_ceiling(layout.count_slots(&region, limit))?;
        }
        let groups = line_slots(&region, &layout);
        debug!(pattern = "line", slots = groups.len(), "scanline fill done");
        return Ok(groups);
    }

    let lattice = Lattice::new(region.bounds(), &config.cell);
    let cells = lattice.cell_count();
    config.check_ceiling(cells)?;
    debug!(
        pattern = config.pattern.name(),
        cells,
        contours = set.len(),
        angle = config.angle_rad,
        "sweeping lattice"
    );

    let template = config
        .pattern
        .cell(config.cell.width, config.cell.height, &config.shape);

    let mut groups = Vec::new();
    for cell in lattice.cells() {
        let segments = clip_cell(&region, &template, cell.origin, config.steps);
        if segments.is_empty() {
            continue;
        }
        trace!(column = cell.column, row = cell.row, segments = segments.len(), "cell clipped");
        groups.push(SegmentGroup {
            column: cell.column,
            row: cell.row,
            segments,
        });
    }

    debug!(groups = groups.len(), "lattice fill done");
    Ok(groups)
}

/// Place the cell template at `origin`, sample it, clip every consecutive
/// point pair and rotate the survivors back.
fn clip_cell(region: &AlignedRegion, template: &[Primitive], origin: Point, steps: SampleSteps) -> Vec<Segment> {
    let mut segments = Vec::new();
    for prim in template {
        let points = prim.translate(origin.x, origin.y).flatten(steps);
        for w in points.windows(2) {
            segments.extend(region.clip(w[0], w[1]).into_iter().map(|s| region.restore(s)));
        }
    }
    segments
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::contains;

    fn square(min: f64, max: f64) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    }

    fn square_set(size: f64) -> PolygonSet {
        PolygonSet::from_rings(vec![square(0.0, size)])
    }

    fn cell(width: f64, height: f64, x_spacing: f64, y_spacing: f64, y_offset: f64) -> CellConfig {
        CellConfig {
            width,
            height,
            x_spacing,
            y_spacing,
            y_offset,
            stagger: StaggerAxis::Columns,
        }
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn rotation_round_trip() {
        let rot = RotationTransform::new(Point::new(5.0, 5.0), 0.7);
        let p = Point::new(12.0, -3.0);
        assert!(close(rot.inverse().apply(rot.apply(p)), p));
        assert!(close(rot.apply(Point::new(5.0, 5.0)), Point::new(5.0, 5.0)));
    }

    #[test]
    fn quarter_turn_aligns_a_tall_box() {
        let tall = PolygonSet::from_rings(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 10.0),
            Point::new(0.0, 10.0),
        ]]);
        let region = AlignedRegion::new(&tall, std::f64::consts::FRAC_PI_2).unwrap();
        let b = region.bounds();
        assert!((b.width() - 10.0).abs() < 1e-9);
        assert!((b.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn origin_count_matches_a_stepping_sweep() {
        for &(start, limit, step) in &[(-3.0, 13.001, 3.0), (0.0, 0.0, 1.0), (-0.7, 10.3, 0.1), (5.0, 4.0, 1.0)] {
            let mut stepped = 0;
            while start + stepped as f64 * step <= limit {
                stepped += 1;
            }
            assert_eq!(origin_count(start, limit, step), stepped, "{} {} {}", start, limit, step);
        }
    }

    #[test]
    fn lattice_covers_square_with_padding() {
        let bounds = Bounds { min_x: 0.0, min_y: 0.0, max_x: 10.0, max_y: 10.0 };
        for &step in &[1.0, 2.5, 3.0, 4.0, 7.0] {
            let lattice = Lattice::new(&bounds, &cell(step, step, 0.0, 0.0, step / 2.0));
            let columns: Vec<f64> = {
                let mut xs: Vec<f64> = lattice.cells().map(|c| c.origin.x).collect();
                xs.dedup();
                xs
            };
            assert!(columns.len() >= (10.0 / step).ceil() as usize + 1, "step {}", step);
            for w in columns.windows(2) {
                assert!(w[1] - w[0] <= step + 1e-9);
            }
            assert!(columns[0] <= bounds.min_x);
            assert!(columns[columns.len() - 1] + step >= bounds.max_x);
            assert_eq!(lattice.cells().count(), lattice.cell_count());
        }
    }

    #[test]
    fn odd_columns_shift_by_offset() {
        let bounds = Bounds { min_x: 0.0, min_y: 0.0, max_x: 10.0, max_y: 10.0 };
        let lattice = Lattice::new(&bounds, &cell(4.0, 6.0, 1.0, 2.0, 3.0));
        let first_in = |column: usize| {
            lattice
                .cells()
                .find(|c| c.column == column)
                .map(|c| c.origin)
                .unwrap()
        };
        assert_eq!(first_in(0), Point::new(-5.0, -8.0));
        assert_eq!(first_in(1), Point::new(0.0, -5.0));
        assert_eq!(first_in(2), Point::new(5.0, -8.0));
    }

    #[test]
    fn row_stagger_shifts_alternate_rows() {
        let bounds = Bounds { min_x: 0.0, min_y: 0.0, max_x: 10.0, max_y: 10.0 };
        let config = CellConfig {
            stagger: StaggerAxis::Rows,
            ..cell(4.0, 4.0, 0.0, 0.0, 2.0)
        };
        let lattice = Lattice::new(&bounds, &config);
        let row0: Vec<f64> = lattice.cells().filter(|c| c.row == 0).map(|c| c.origin.x).collect();
        let row1: Vec<f64> = lattice.cells().filter(|c| c.row == 1).map(|c| c.origin.x).collect();

        assert!(lattice.cells().filter(|c| c.row == 0).all(|c| c.origin.y == -4.0));
        assert_eq!(row0[0], -4.0);
        assert_eq!(row1[0], -2.0);
        assert_eq!(lattice.cells().count(), lattice.cell_count());
    }

    #[test]
    fn fishbone_apex_outside_gives_two_legs() {
        let region = AlignedRegion::new(&square_set(10.0), 0.0).unwrap();
        let template = PatternKind::Fishbone.cell(4.0, 8.0, &ShapeParams::default());
        let segments = clip_cell(&region, &template, Point::new(3.0, 5.0), SampleSteps::default());

        assert_eq!(segments.len(), 2);
        assert!(close(segments[0].start, Point::new(3.0, 5.0)));
        assert!(close(segments[0].end, Point::new(4.25, 10.0)));
        assert!(close(segments[1].start, Point::new(5.75, 10.0)));
        assert!(close(segments[1].end, Point::new(7.0, 5.0)));
    }

    #[test]
    fn every_segment_lies_inside_the_region() {
        let set = PolygonSet::from_rings(vec![square(0.0, 40.0), square(15.0, 25.0)]);
        for &kind in PatternKind::all() {
            let bounds = set.bounds().unwrap();
            let config = HingeConfig::for_pattern(kind, &kind.default_input(), &bounds)
                .unwrap()
                .with_angle(0.4);
            let groups = generate_hinge(&set, &config).unwrap();
            assert!(!groups.is_empty(), "{} produced nothing", kind.name());
            for seg in groups.iter().flat_map(|g| g.segments.iter()) {
                // Midpoints of clipped pieces are inside up to rounding.
                let mid = seg.midpoint();
                assert!(contains(&set, mid) || seg.length() < 1e-6, "{}: {:?}", kind.name(), seg);
            }
        }
    }

    #[test]
    fn angle_is_periodic() {
        let set = PolygonSet::from_rings(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 5.0),
            Point::new(25.0, 28.0),
            Point::new(-4.0, 20.0),
        ]]);
        let bounds = set.bounds().unwrap();
        let base = HingeConfig::for_pattern(PatternKind::Bezier, &PatternKind::Bezier.default_input(), &bounds).unwrap();

        let theta = 0.9;
        let a = generate_hinge(&set, &base.clone().with_angle(theta)).unwrap();
        let b = generate_hinge(&set, &base.with_angle(theta + TAU)).unwrap();

        assert_eq!(a.len(), b.len());
        for (ga, gb) in a.iter().zip(&b) {
            assert_eq!((ga.column, ga.row), (gb.column, gb.row));
            assert_eq!(ga.segments.len(), gb.segments.len());
            for (sa, sb) in ga.segments.iter().zip(&gb.segments) {
                assert!(close(sa.start, sb.start) && close(sa.end, sb.end));
            }
        }
    }

    #[test]
    fn cross_overlap_is_accepted_until_step_collapses() {
        let set = square_set(30.0);
        let overlapping = HingeConfig::new(PatternKind::Cross, cell(10.0, 10.0, -4.0, 10.0, 10.0));
        let groups = generate_hinge(&set, &overlapping).unwrap();
        assert!(!groups.is_empty());

        let collapsed = HingeConfig::new(PatternKind::Cross, cell(10.0, 10.0, -10.0, 10.0, 10.0));
        assert_eq!(
            generate_hinge(&set, &collapsed),
            Err(HingeError::NonPositiveStep { step_x: 0.0, step_y: 20.0 })
        );
    }

    #[test]
    fn empty_set_yields_nothing() {
        let config = HingeConfig::new(PatternKind::Fishbone, cell(5.0, 10.0, 2.0, 2.0, 6.0));
        assert_eq!(generate_hinge(&PolygonSet::default(), &config), Ok(Vec::new()));
    }

    #[test]
    fn bad_config_fails_even_without_geometry() {
        let config = HingeConfig::new(PatternKind::Fishbone, cell(5.0, 10.0, -5.0, 2.0, 6.0));
        assert!(matches!(
            generate_hinge(&PolygonSet::default(), &config),
            Err(HingeError::NonPositiveStep { .. })
        ));

        let config = HingeConfig::new(PatternKind::Wave, cell(5.0, 10.0, 0.0, 0.0, 5.0)).with_angle(f64::INFINITY);
        assert_eq!(generate_hinge(&square_set(10.0), &config), Err(HingeError::NonFinite("angle_rad")));
    }

    #[test]
    fn cell_ceiling_is_enforced() {
        let set = square_set(100.0);
        let config = HingeConfig::new(PatternKind::Fishbone, cell(1.0, 1.0, 0.0, 0.0, 0.5)).with_max_cells(Some(50));
        assert!(matches!(
            generate_hinge(&set, &config),
            Err(HingeError::TooManyCells { limit: 50, .. })
        ));

        let roomy = config.with_max_cells(Some(1_000_000));
        assert!(generate_hinge(&set, &roomy).is_ok());
    }

    #[test]
    fn line_ceiling_counts_every_interval() {
        // Ten bars stacked with gaps; each scan column yields one slot per bar.
        let set = PolygonSet::from_rings((0..10).map(|i| {
            let y = i as f64 * 4.0;
            square(0.0, 10.0).into_iter().map(|p| Point::new(p.x, y + p.y * 0.2)).collect::<Vec<_>>()
        }));
        let config = HingeConfig::new(PatternKind::Line, cell(0.0, 200.0, 5.0, 1.0, 0.0));

        assert!(matches!(
            generate_hinge(&set, &config.clone().with_max_cells(Some(6))),
            Err(HingeError::TooManyCells { cells: 7, limit: 6 })
        ));
        assert_eq!(generate_hinge(&set, &config.with_max_cells(Some(20))).unwrap().len(), 20);
    }

    #[test]
    fn hand_built_cell_with_negative_width_is_rejected() {
        let config = HingeConfig::new(PatternKind::Wave, cell(-1.0, 5.0, 4.0, 0.0, 2.5));
        assert_eq!(generate_hinge(&square_set(10.0), &config), Err(HingeError::NegativeWidth(-1.0)));

        let config = HingeConfig::new(PatternKind::Fabric, cell(5.0, -3.0, 0.0, 5.0, 0.0));
        assert_eq!(generate_hinge(&square_set(10.0), &config), Err(HingeError::NonPositiveHeight(-3.0)));
    }

    #[test]
    fn cells_outside_the_shape_are_dropped() {
        // An L-shaped region leaves the top-right quadrant of its box empty.
        let set = PolygonSet::from_rings(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 20.0),
            Point::new(0.0, 20.0),
        ]]);
        let config = HingeConfig::new(PatternKind::Fishbone, cell(2.0, 2.0, 1.0, 1.0, 1.5));
        let groups = generate_hinge(&set, &config).unwrap();
        assert!(groups.iter().all(|g| !g.segments.is_empty()));
        let total = Lattice::new(&set.bounds().unwrap(), &config.cell).cell_count();
        assert!(groups.len() < total);
    }

    #[test]
    fn line_pattern_uses_scanline_slots() {
        let set = square_set(10.0);
        let config = HingeConfig::new(PatternKind::Line, cell(0.0, 2.0, 3.0, 1.0, 0.0));
        let groups = generate_hinge(&set, &config).unwrap();
        assert_eq!(groups.len(), 16);
        assert!(groups.iter().all(|g| g.segments.len() == 1));
        let seg = groups[0].segments[0];
        assert!(close(seg.start, Point::new(0.0, 0.0)) && close(seg.end, Point::new(0.0, 2.0)));
    }
}
