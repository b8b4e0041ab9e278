//! Fabric pattern - two interlocking right-angle hooks (basket weave).

use crate::curve::Primitive;

use super::{CellConfig, PatternInput, StaggerAxis};

pub(super) fn cell(width: f64, height: f64) -> Vec<Primitive> {
    let at = |fx: f64, fy: f64| (width * fx, height * fy);

    vec![
        Primitive::polyline(&[
            at(0.25, 0.25),
            at(0.0, 0.25),
            at(0.0, 0.0),
            at(0.5, 0.0),
            at(0.5, 1.0),
            at(1.0, 1.0),
            at(1.0, 0.75),
            at(0.75, 0.75),
        ]),
        Primitive::polyline(&[
            at(0.75, 0.25),
            at(0.75, 0.0),
            at(1.0, 0.0),
            at(1.0, 0.5),
            at(0.0, 0.5),
            at(0.0, 1.0),
            at(0.25, 1.0),
            at(0.25, 0.75),
        ]),
    ]
}

pub(super) fn config(input: &PatternInput) -> CellConfig {
    CellConfig {
        width: input.width,
        height: input.height,
        x_spacing: -0.375 * input.width,
        y_spacing: 0.25 * input.height,
        y_offset: 0.625 * input.height,
        stagger: StaggerAxis::Columns,
    }
}
