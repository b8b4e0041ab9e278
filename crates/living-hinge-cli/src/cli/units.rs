//! Length units.
//!
//! Pattern sizes are entered in physical units (millimetres by default) and
//! the engine works in document pixels. Conversion uses the CSS reference
//! resolution of 96 pixels per inch, the same one usvg resolves documents at.

use anyhow::{bail, Context, Result};
use svgtypes::{Length, LengthUnit};

/// Document pixels per inch.
pub const DPI: f64 = 96.0;

/// Number of document pixels in one `unit`.
///
/// An empty unit means pixels. Relative units (`em`, `ex`, `%`) have no
/// fixed size and are rejected.
pub fn unit_scale(unit: &str) -> Result<f64> {
    let unit = unit.trim();
    let length: Length = format!("1{}", unit)
        .parse()
        .with_context(|| format!("unknown unit '{}'", unit))?;
    if length.number != 1.0 {
        bail!("unknown unit '{}'", unit);
    }

    let scale = match length.unit {
        LengthUnit::None | LengthUnit::Px => 1.0,
        LengthUnit::In => DPI,
        LengthUnit::Cm => DPI / 2.54,
        LengthUnit::Mm => DPI / 25.4,
        LengthUnit::Pt => DPI / 72.0,
        LengthUnit::Pc => DPI / 6.0,
        _ => {
            bail!("unit '{}' is relative and cannot size a pattern", unit)
        }
    };
    Ok(scale)
}

/// Convert `value` in `unit` to document pixels.
pub fn to_user_units(value: f64, unit: &str) -> Result<f64> {
    Ok(value * unit_scale(unit)?)
}
