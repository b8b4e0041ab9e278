//! Scanline fast path for the line pattern.
//!
//! Vertical slots do not need the general clipper. One vertical scan per
//! column yields the interior intervals directly, and the slots are laid out
//! inside them.

use std::ops::ControlFlow;

use tracing::trace;

use crate::geometry::{Bounds, Point, PolygonSet, Segment};
use crate::lattice::{origin_count, AlignedRegion, SegmentGroup};
use crate::patterns::CellConfig;

/// Crossings closer than this along the scan are the same crossing.
const HIT_EPSILON: f64 = 1e-9;

/// Intervals and slots shorter than this are dropped; also the sweep slack.
const MIN_SPAN: f64 = 0.001;

/// Interior `(y0, y1)` intervals of the vertical line at `x`, bottom to top.
///
/// An edge is crossed when its endpoints lie on different sides of `x`
/// (strictly greater vs. not), so a vertex exactly on the scan line counts
/// once. Hits from all contours are sorted together and paired, which is the
/// even-odd rule along the scan. A trailing unpaired hit is dropped.
pub fn interior_intervals(set: &PolygonSet, x: f64) -> Vec<(f64, f64)> {
    let mut hits: Vec<f64> = set
        .edges()
        .filter(|(a, b)| (a.x > x) != (b.x > x))
        .map(|(a, b)| a.y + (x - a.x) * (b.y - a.y) / (b.x - a.x))
        .collect();

    hits.sort_by(f64::total_cmp);
    hits.dedup_by(|a, b| (*a - *b).abs() < HIT_EPSILON);

    hits.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Slot placement parameters for the line pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    pub slot_length: f64,
    pub slot_gap: f64,
    pub column_spacing: f64,
    /// Phase shift applied to odd columns.
    pub offset: f64,
}

impl SlotLayout {
    /// Read the layout out of a derived line-pattern cell.
    pub fn from_cell(cell: &CellConfig) -> Self {
        Self {
            slot_length: cell.height,
            slot_gap: cell.y_spacing,
            column_spacing: cell.step_x(),
            offset: cell.y_offset,
        }
    }

    /// Distance between the starts of consecutive slots in a column.
    #[inline]
    pub fn step(&self) -> f64 {
        self.slot_length + self.slot_gap
    }

    /// Number of scan columns over `bounds`.
    pub fn column_count(&self, bounds: &Bounds) -> usize {
        origin_count(bounds.min_x, bounds.max_x + MIN_SPAN, self.column_spacing)
    }

    /// Number of slots the layout puts into `region`. Counting stops once
    /// it passes `limit`.
    ///
    /// Every interval of every column is visited, so a column that crosses
    /// several contours counts each slot it really gets.
    pub fn count_slots(&self, region: &AlignedRegion, limit: usize) -> usize {
        let mut count = 0usize;
        visit_slots(region, self, |_, _| {
            count += 1;
            if count > limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        count
    }
}

/// Walk every slot of every column in sweep order, in the aligned frame.
///
/// ## Rust Lesson #22: ControlFlow
///
/// `ControlFlow::Break` lets the visitor stop the walk early without an
/// error type, the same way `try_for_each` does for iterators.
fn visit_slots<F>(region: &AlignedRegion, layout: &SlotLayout, mut visit: F)
where
    F: FnMut(usize, Segment) -> ControlFlow<()>,
{
    let bounds = *region.bounds();
    let step = layout.step();

    for column in 0..layout.column_count(&bounds) {
        let x = bounds.min_x + column as f64 * layout.column_spacing;
        let base = bounds.min_y + if column % 2 == 1 { layout.offset } else { 0.0 };
        let mut slots = 0usize;

        for (raw_y0, raw_y1) in interior_intervals(region.polygons(), x) {
            let y0 = raw_y0.max(bounds.min_y);
            let y1 = raw_y1.min(bounds.max_y);
            if y1 - y0 <= MIN_SPAN {
                continue;
            }

            // First slot whose far end can reach into the interval.
            let mut n = ((y0 - layout.slot_length - base) / step).ceil() as i64;
            loop {
                let y = base + n as f64 * step;
                if y >= y1 + MIN_SPAN {
                    break;
                }
                let start = y.max(y0);
                let end = (y + layout.slot_length).min(y1);
                if end - start > MIN_SPAN {
                    let slot = Segment::new(Point::new(x, start), Point::new(x, end));
                    if visit(column, slot).is_break() {
                        return;
                    }
                    slots += 1;
                }
                n += 1;
            }
        }

        trace!(column, x, slots, "scanned column");
    }
}

/// Lay staggered slots into every column of the aligned region.
///
/// Each slot becomes its own group, already rotated back into the original
/// frame. `row` counts slots within a column across all its intervals.
pub fn line_slots(region: &AlignedRegion, layout: &SlotLayout) -> Vec<SegmentGroup> {
    let mut groups: Vec<SegmentGroup> = Vec::new();
    visit_slots(region, layout, |column, slot| {
        let row = match groups.last() {
            Some(last) if last.column == column => last.row + 1,
            _ => 0,
        };
        groups.push(SegmentGroup {
            column,
            row,
            segments: vec![region.restore(slot)],
        });
        ControlFlow::Continue(())
    });
    groups
}
