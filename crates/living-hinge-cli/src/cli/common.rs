//! Common utilities shared across CLI commands: input, output writers.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use living_hinge::{CellConfig, SegmentGroup};

use super::units::DPI;

const MM_PER_PX: f64 = 25.4 / DPI;

/// Output format for generated hinges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Json,
}

/// The hinge generated for one input shape.
#[derive(Debug, Serialize)]
pub struct ShapeFill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub index: usize,
    pub groups: Vec<SegmentGroup>,
}

/// JSON document written by `fill -f json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    pattern: &'a str,
    cell: &'a CellConfig,
    angle_deg: f64,
    shapes: &'a [ShapeFill],
}

/// Read SVG text from a file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        info!("reading SVG from stdin");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read SVG from stdin")?;
        Ok(buffer)
    } else {
        info!(path = %path.display(), "loading SVG");
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Write to a file, or stdout when no path (or `-`) is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        _ => print!("{}", content),
    }
    Ok(())
}

/// Render the hinge as an SVG document.
///
/// All cuts go into one group with the laser-cut stroke style; each segment
/// group becomes one `<path>`. Coordinates are document pixels, so the page
/// keeps the input's physical size and the output overlays the source.
pub fn hinge_to_svg(fills: &[ShapeFill], page_width: f64, page_height: f64, stroke_width: f64) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="{:.3}mm" height="{:.3}mm" viewBox="0 0 {:.3} {:.3}">
<g id="living-hinge" inkscape:label="Living Hinge" stroke="#000000" stroke-width="{:.4}" fill="none" stroke-linecap="round">
"##,
        page_width * MM_PER_PX,
        page_height * MM_PER_PX,
        page_width,
        page_height,
        stroke_width
    ));

    for group in fills.iter().flat_map(|f| f.groups.iter()) {
        if group.segments.is_empty() {
            continue;
        }
        let d = group
            .segments
            .iter()
            .map(|seg| {
                format!(
                    "M {:.3},{:.3} L {:.3},{:.3}",
                    seg.start.x, seg.start.y, seg.end.x, seg.end.y
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!("  <path d=\"{}\"/>\n", d));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Render the hinge as JSON: the resolved cell plus every group per shape.
pub fn hinge_to_json(pattern: &str, cell: &CellConfig, angle_deg: f64, fills: &[ShapeFill]) -> Result<String> {
    let doc = JsonOutput {
        pattern,
        cell,
        angle_deg,
        shapes: fills,
    };
    serde_json::to_string_pretty(&doc).context("failed to serialize JSON")
}
