use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::info;

use sprinklerkit::{
    generate_region_layout, init_logging, render_layout, Bounds, LayoutConfig, Region, SketchShape,
    SprinklerPlacement, SvgOptions,
};

/// Accepts either a bare array of sketch elements or the document shape the
/// persistence layer exports (`{"sketch_elements": [...]}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SketchDocument {
    Shapes(Vec<SketchShape>),
    Document { sketch_elements: Vec<SketchShape> },
}

impl SketchDocument {
    fn into_shapes(self) -> Vec<SketchShape> {
        match self {
            SketchDocument::Shapes(shapes) => shapes,
            SketchDocument::Document { sketch_elements } => sketch_elements,
        }
    }
}

/// Response envelope of the layout endpoint.
#[derive(Debug, Serialize)]
struct LayoutResponse<'a> {
    status: &'static str,
    area_bounds: Option<Bounds>,
    sprinklers: &'a [SprinklerPlacement],
    /// Zoning is handled upstream; always empty here.
    zones: Vec<serde_json::Value>,
}

struct CliArgs {
    input: PathBuf,
    svg_output: Option<PathBuf>,
    radius: Option<f64>,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut input = None;
    let mut svg_output = None;
    let mut radius = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--svg" => {
                let path = args.next().context("--svg requires an output path")?;
                svg_output = Some(PathBuf::from(path));
            }
            "--radius" => {
                let value = args.next().context("--radius requires a value")?;
                radius = Some(value.parse().context("--radius must be a number")?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            path if input.is_none() => input = Some(PathBuf::from(path)),
            other => bail!("unexpected argument: {other}"),
        }
    }

    let input = input.context("missing input file; see --help")?;
    Ok(CliArgs {
        input,
        svg_output,
        radius,
    })
}

fn print_usage() {
    println!("sprinklerkit {} ({})", sprinklerkit::VERSION, sprinklerkit::BUILD_DATE);
    println!();
    println!("Usage: sprinklerkit <sketch.json> [--svg <out.svg>] [--radius <feet>]");
    println!();
    println!("Reads a yard's sketch elements (JSON array of {{type, geometry,");
    println!("properties}} records) and prints the generated sprinkler layout as");
    println!("JSON, or writes an SVG rendering when --svg is given.");
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let document: SketchDocument =
        serde_json::from_str(&raw).context("failed to parse sketch elements")?;
    let shapes = document.into_shapes();

    let config = match args.radius {
        Some(radius) => LayoutConfig::with_radius(radius),
        None => LayoutConfig::default(),
    };

    let region = Region::resolve(&shapes);
    let plan = generate_region_layout(&region, &config)?;
    info!(
        "layout for {}: {} heads",
        args.input.display(),
        plan.sprinklers.len()
    );

    if let Some(svg_path) = &args.svg_output {
        let svg = render_layout(&region, &plan.sprinklers, &SvgOptions::default());
        fs::write(svg_path, svg)
            .with_context(|| format!("failed to write {}", svg_path.display()))?;
        return Ok(());
    }

    let response = LayoutResponse {
        status: "sprinklers_generated",
        area_bounds: plan.bounds,
        sprinklers: &plan.sprinklers,
        zones: Vec::new(),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
