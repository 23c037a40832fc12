use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use doc_size::{ConvertOptions, Dimensions, Document, ResolveOptions};
use std::fmt::Write;
use std::path::PathBuf;

mod config;
mod logger;

#[derive(Parser)]
#[command(name = "docsize", about = "Document size calculator", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a paper preset or explicit size into document and canvas dimensions
    Resolve(ResolveArgs),

    /// List the available paper size presets
    Presets,

    /// Convert a length between units
    Convert {
        value: f64,

        #[arg(value_enum)]
        from: UnitsArg,

        #[arg(value_enum)]
        to: UnitsArg,

        /// Resolution used when either side is px
        #[arg(long, default_value = "96")]
        ppi: f64,

        /// Round to the nearest whole pixel when converting to px
        #[arg(long)]
        round_pixel: bool,

        /// Decimal places to round the result to
        #[arg(long)]
        precision: Option<u32>,
    },
}

#[derive(Args)]
struct ResolveArgs {
    /// Paper size preset (e.g. a4, letter) or explicit size as WxH (e.g. 1920x1080)
    #[arg(value_parser = parse_dimensions)]
    dimensions: Option<Dimensions>,

    /// JSON options file; command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output units [default: px]
    #[arg(short, long, value_enum)]
    units: Option<UnitsArg>,

    /// Resolution used for the canvas size [default: 72]
    #[arg(long)]
    ppi: Option<f64>,

    /// Force portrait or landscape
    #[arg(short, long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Factor applied to the canvas size [default: 1]
    #[arg(long)]
    pixel_ratio: Option<f64>,

    /// Print the document as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Px,
    In,
    Ft,
    Pt,
    Pc,
    M,
    Cm,
    Mm,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<UnitsArg> for doc_size::Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Px => Self::Px,
            UnitsArg::In => Self::In,
            UnitsArg::Ft => Self::Ft,
            UnitsArg::Pt => Self::Pt,
            UnitsArg::Pc => Self::Pc,
            UnitsArg::M => Self::M,
            UnitsArg::Cm => Self::Cm,
            UnitsArg::Mm => Self::Mm,
        }
    }
}

impl From<OrientationArg> for doc_size::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

/// Parse `WxH` as an explicit size, anything else as a preset name
fn parse_dimensions(s: &str) -> std::result::Result<Dimensions, String> {
    let Some((width, height)) = s.split_once(['x', 'X']) else {
        return Ok(Dimensions::Preset(s.to_string()));
    };
    match (width.trim().parse::<f64>(), height.trim().parse::<f64>()) {
        (Ok(width), Ok(height)) => Ok(Dimensions::Size([width, height])),
        // Not numeric on both sides, so it is a preset name containing an 'x'
        _ => Ok(Dimensions::Preset(s.to_string())),
    }
}

fn format_document(doc: &Document, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(doc)?);
    }
    let mut out = String::new();
    writeln!(out, "Document:")?;
    writeln!(out, "  Size: {} x {} {}", doc.width, doc.height, doc.units)?;
    writeln!(out, "  Orientation: {}", doc.orientation())?;
    writeln!(out, "  Canvas: {} x {} px", doc.canvas_width, doc.canvas_height)?;
    writeln!(out, "  Pixels per inch: {}", doc.pixels_per_inch)?;
    write!(out, "  Pixel ratio: {}", doc.pixel_ratio)?;
    Ok(out)
}

/// Merge flags over the optional config file, resolve, and format the result
async fn run_resolve(args: ResolveArgs) -> Result<String> {
    let flags = ResolveOptions {
        dimensions: args.dimensions,
        units: args.units.map(Into::into),
        pixels_per_inch: args.ppi,
        orientation: args.orientation.map(Into::into),
        pixel_ratio: args.pixel_ratio,
    };
    let options = match args.config {
        Some(path) => flags.or(config::load_options(&path).await?),
        None => flags,
    };

    let doc = doc_size::resolve(options).context("Failed to resolve document size")?;
    format_document(&doc, args.json)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Resolve(args) => {
            println!("{}", run_resolve(args).await?);
        }

        Commands::Presets => {
            for (name, entry) in doc_size::paper_sizes::presets() {
                println!(
                    "{:<18} {} x {} {}",
                    name, entry.dimensions[0], entry.dimensions[1], entry.units
                );
            }
        }

        Commands::Convert {
            value,
            from,
            to,
            ppi,
            round_pixel,
            precision,
        } => {
            let options = ConvertOptions {
                round_pixel,
                pixels_per_inch: ppi,
                precision,
            };
            let (from, to) = (from.into(), to.into());
            let result = doc_size::convert(value, from, to, &options);
            log::debug!("{} {} -> {} {}", value, from, result, to);
            println!("{} {}", result, to);
        }
    }

    Ok(())
}
