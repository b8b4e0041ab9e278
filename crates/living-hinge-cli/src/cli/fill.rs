//! Fill command implementation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use living_hinge::{
    generate_hinge, parse_svg, union_bounds, HingeConfig, PatternInput, PatternKind, ShapeParams,
};

use super::common::{hinge_to_json, hinge_to_svg, read_input, write_output, OutputFormat, ShapeFill};
use super::recipe::{HingeRecipe, EXAMPLE_RECIPE};
use super::units::{to_user_units, unit_scale};

/// Laser kerf stroke width of the output paths, in millimetres.
const STROKE_WIDTH_MM: f64 = 0.25;

#[derive(Args, Debug)]
pub struct FillArgs {
    /// Input SVG file ('-' reads stdin)
    #[arg(required_unless_present = "example_recipe")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pattern name (see `living-hinge patterns`; default: line)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Output format (default: svg)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// YAML recipe with fill settings; flags override it
    #[arg(long)]
    pub recipe: Option<PathBuf>,

    /// Unit for all lengths (mm, cm, in, px, pt, pc; default: mm)
    #[arg(long)]
    pub units: Option<String>,

    /// Pattern rotation in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Cell height (percent of the shape height for the line pattern)
    #[arg(long)]
    pub height: Option<f64>,

    /// Cell width
    #[arg(long)]
    pub width: Option<f64>,

    /// Horizontal spacing between cells
    #[arg(long, allow_negative_numbers = true)]
    pub x_spacing: Option<f64>,

    /// Vertical gap between cells
    #[arg(long, allow_negative_numbers = true)]
    pub y_spacing: Option<f64>,

    /// Bezier: tangent pull near the base (fraction of width)
    #[arg(long)]
    pub anchor_tip: Option<f64>,

    /// Bezier: flattening near the apex (fraction of width)
    #[arg(long)]
    pub anchor_center: Option<f64>,

    /// Wave: horizontal control-point shift (fraction of width)
    #[arg(long, allow_negative_numbers = true)]
    pub param_a: Option<f64>,

    /// Wave: vertical control-point shift (fraction of height)
    #[arg(long, allow_negative_numbers = true)]
    pub param_b: Option<f64>,

    /// Fail instead of sweeping more cells than this per shape
    #[arg(long)]
    pub max_cells: Option<usize>,

    /// Print an example recipe and exit
    #[arg(long)]
    pub example_recipe: bool,
}

/// Flags, recipe and pattern defaults merged into one set of values.
#[derive(Debug, Clone, PartialEq)]
pub struct FillSettings {
    pub pattern: PatternKind,
    pub units: String,
    pub angle_deg: f64,
    /// Pattern inputs, lengths already in document pixels.
    pub input: PatternInput,
    pub shape: ShapeParams,
    pub max_cells: Option<usize>,
    pub format: OutputFormat,
}

impl FillSettings {
    /// Precedence: command-line flag, then recipe, then the pattern's default.
    pub fn resolve(args: &FillArgs, recipe: Option<&HingeRecipe>) -> Result<Self> {
        let pick = |flag: Option<f64>, field: fn(&HingeRecipe) -> Option<f64>| {
            flag.or_else(|| recipe.and_then(field))
        };

        let name = args
            .pattern
            .clone()
            .or_else(|| recipe.and_then(|r| r.pattern.clone()))
            .unwrap_or_else(|| "line".to_string());
        let pattern = PatternKind::from_name(&name)
            .with_context(|| format!("unknown pattern '{}' (see `living-hinge patterns`)", name))?;

        let units = args
            .units
            .clone()
            .or_else(|| recipe.and_then(|r| r.units.clone()))
            .unwrap_or_else(|| "mm".to_string());
        let scale = unit_scale(&units)?;

        let defaults = pattern.default_input();
        let x_spacing = pick(args.x_spacing, |r| r.x_spacing).unwrap_or(defaults.x_spacing) * scale;
        let y_spacing = pick(args.y_spacing, |r| r.y_spacing).unwrap_or(defaults.y_spacing) * scale;
        let input = if pattern == PatternKind::Line {
            PatternInput {
                height: pick(args.height, |r| r.height)
                    .map(|percent| percent / 100.0)
                    .unwrap_or(defaults.height),
                width: 0.0,
                x_spacing,
                y_spacing,
            }
        } else {
            PatternInput {
                height: pick(args.height, |r| r.height).unwrap_or(defaults.height) * scale,
                width: pick(args.width, |r| r.width).unwrap_or(defaults.width) * scale,
                x_spacing,
                y_spacing,
            }
        };

        let base = ShapeParams::default();
        let shape = ShapeParams {
            anchor_tip: pick(args.anchor_tip, |r| r.anchor_tip).unwrap_or(base.anchor_tip),
            anchor_center: pick(args.anchor_center, |r| r.anchor_center).unwrap_or(base.anchor_center),
            param_a: pick(args.param_a, |r| r.param_a).unwrap_or(base.param_a),
            param_b: pick(args.param_b, |r| r.param_b).unwrap_or(base.param_b),
        };

        Ok(Self {
            pattern,
            units,
            angle_deg: pick(args.angle, |r| r.angle).unwrap_or(0.0),
            input,
            shape,
            max_cells: args.max_cells.or_else(|| recipe.and_then(|r| r.max_cells)),
            format: args
                .format
                .or_else(|| recipe.and_then(|r| r.format))
                .unwrap_or(OutputFormat::Svg),
        })
    }
}

/// Execute the fill command.
pub fn cmd_fill(args: &FillArgs) -> Result<()> {
    if args.example_recipe {
        print!("{}", EXAMPLE_RECIPE);
        return Ok(());
    }

    let recipe = args.recipe.as_ref().map(HingeRecipe::load).transpose()?;
    if let Some(name) = recipe.as_ref().and_then(|r| r.name.as_deref()) {
        info!(recipe = name, "using recipe");
    }
    let settings = FillSettings::resolve(args, recipe.as_ref())?;

    let input = args.input.as_deref().context("an input SVG is required")?;
    let svg_content = read_input(input)?;
    let document = parse_svg(&svg_content).context("failed to read shapes from SVG")?;
    let regions = &document.shapes;
    let bounds = union_bounds(regions).context("input shapes have no extent")?;

    let contours: usize = regions.iter().map(|r| r.polygons.len()).sum();
    info!(shapes = regions.len(), contours, pattern = settings.pattern.name(), "loaded shapes");

    // One configuration for all shapes, derived from their combined extent.
    let config = HingeConfig::for_pattern(settings.pattern, &settings.input, &bounds)
        .with_context(|| format!("invalid {} pattern settings", settings.pattern.name()))?
        .with_angle(settings.angle_deg.to_radians())
        .with_shape(settings.shape)
        .with_max_cells(settings.max_cells);

    let start = Instant::now();
    let mut fills = Vec::with_capacity(regions.len());
    for (index, region) in regions.iter().enumerate() {
        let groups = generate_hinge(&region.polygons, &config).with_context(|| match &region.id {
            Some(id) => format!("failed to fill shape '{}'", id),
            None => format!("failed to fill shape #{}", index),
        })?;
        if groups.is_empty() {
            warn!(index, id = region.id.as_deref().unwrap_or(""), "pattern left shape empty");
        }
        fills.push(ShapeFill {
            id: region.id.clone(),
            index,
            groups,
        });
    }

    let groups: usize = fills.iter().map(|f| f.groups.len()).sum();
    let segments: usize = fills
        .iter()
        .flat_map(|f| f.groups.iter())
        .map(|g| g.segments.len())
        .sum();
    info!(groups, segments, elapsed = ?start.elapsed(), "generated hinge");

    let output = match settings.format {
        OutputFormat::Svg => {
            let stroke_width = to_user_units(STROKE_WIDTH_MM, "mm")?;
            hinge_to_svg(&fills, document.width, document.height, stroke_width)
        }
        OutputFormat::Json => hinge_to_json(settings.pattern.name(), &config.cell, settings.angle_deg, &fills)?,
    };

    write_output(args.output.as_deref(), &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        fill: FillArgs,
    }

    fn parse(args: &[&str]) -> FillArgs {
        let argv = std::iter::once("fill").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().fill
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn defaults_are_line_in_mm() {
        let settings = FillSettings::resolve(&parse(&["in.svg"]), None).unwrap();
        assert_eq!(settings.pattern, PatternKind::Line);
        assert_eq!(settings.units, "mm");
        assert_eq!(settings.format, OutputFormat::Svg);
        assert!(close(settings.input.height, 0.8));
        assert!(close(settings.input.x_spacing, 2.0 * 96.0 / 25.4));
    }

    #[test]
    fn line_height_is_a_percentage() {
        let settings = FillSettings::resolve(&parse(&["in.svg", "--height", "50", "--units", "px"]), None).unwrap();
        assert!(close(settings.input.height, 0.5));
        assert_eq!(settings.input.width, 0.0);
    }

    #[test]
    fn lengths_are_scaled_by_units() {
        let args = parse(&["in.svg", "-p", "fishbone", "--units", "in", "--width", "0.5", "--x-spacing", "-0.25"]);
        let settings = FillSettings::resolve(&args, None).unwrap();
        assert!(close(settings.input.width, 48.0));
        assert!(close(settings.input.x_spacing, -24.0));
        assert!(close(settings.input.height, 10.0 * 96.0));
    }

    #[test]
    fn flags_override_recipe() {
        let recipe = HingeRecipe {
            pattern: Some("wave".to_string()),
            units: Some("px".to_string()),
            height: Some(20.0),
            width: Some(8.0),
            param_a: Some(0.1),
            angle: Some(30.0),
            format: Some(OutputFormat::Json),
            ..HingeRecipe::default()
        };
        let args = parse(&["in.svg", "--width", "4", "--angle", "-15"]);
        let settings = FillSettings::resolve(&args, Some(&recipe)).unwrap();

        assert_eq!(settings.pattern, PatternKind::Wave);
        assert!(close(settings.input.height, 20.0));
        assert!(close(settings.input.width, 4.0));
        assert!(close(settings.shape.param_a, 0.1));
        assert!(close(settings.angle_deg, -15.0));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_pattern_and_unit_fail() {
        assert!(FillSettings::resolve(&parse(&["in.svg", "-p", "spiral"]), None).is_err());
        assert!(FillSettings::resolve(&parse(&["in.svg", "--units", "em"]), None).is_err());
    }

    #[test]
    fn input_is_required_unless_printing_the_example() {
        assert!(TestCli::try_parse_from(["fill"]).is_err());
        assert!(TestCli::try_parse_from(["fill", "--example-recipe"]).is_ok());
    }
}
