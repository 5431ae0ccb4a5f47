//! Twisted Torus CLI
//!
//! Generates a twisted torus and writes it as OBJ or JSON.
//!
//! # Usage
//!
//! ```bash
//! # Default torus to stdout
//! twisted-torus
//!
//! # Three twists, written to a file
//! twisted-torus --twists 3 --output torus.obj
//!
//! # Radii from the ring's outer and inner extents
//! twisted-torus --exterior 2.0 --interior 1.0 --format json
//! ```

mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use config::constants::{
    DEFAULT_EXTERIOR_RADIUS, DEFAULT_INTERIOR_RADIUS, DEFAULT_MAJOR_RADIUS,
    DEFAULT_MAJOR_SEGMENTS, DEFAULT_MINOR_RADIUS, DEFAULT_MINOR_SEGMENTS, DEFAULT_OBJECT_NAME,
    DEFAULT_TWISTS, MAX_SEGMENTS, MAX_TWISTS, MIN_SEGMENTS,
};
use glam::DVec3;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use twisted_torus::{add_twisted_torus, MeshObjectBuilder, RadiusInput, TorusRequest};

use output::Format;

/// Twisted torus mesh generator
#[derive(Parser, Debug)]
#[command(name = "twisted-torus")]
#[command(author, version, about = "Generate a twisted torus quad mesh", long_about = None)]
struct Cli {
    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Radius from the origin to the center of the cross section
    #[arg(long, conflicts_with_all = ["exterior", "interior"])]
    major_radius: Option<f64>,

    /// Radius of the cross section
    #[arg(long, conflicts_with_all = ["exterior", "interior"])]
    minor_radius: Option<f64>,

    /// Outer extent of the ring (replaces the major/minor radii)
    #[arg(long)]
    exterior: Option<f64>,

    /// Inner extent of the ring (replaces the major/minor radii)
    #[arg(long)]
    interior: Option<f64>,

    /// Segments around the main ring
    #[arg(
        short = 'M',
        long,
        default_value_t = DEFAULT_MAJOR_SEGMENTS,
        value_parser = clap::value_parser!(u32).range(MIN_SEGMENTS as i64..=MAX_SEGMENTS as i64)
    )]
    major_segments: u32,

    /// Segments around the cross section
    #[arg(
        short = 'm',
        long,
        default_value_t = DEFAULT_MINOR_SEGMENTS,
        value_parser = clap::value_parser!(u32).range(MIN_SEGMENTS as i64..=MAX_SEGMENTS as i64)
    )]
    minor_segments: u32,

    /// Full turns of the cross section over one sweep
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TWISTS,
        value_parser = clap::value_parser!(u32).range(0..=MAX_TWISTS as i64)
    )]
    twists: u32,

    /// Object origin as x,y,z
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    origin: Vec<f64>,

    /// Object name
    #[arg(long, default_value = DEFAULT_OBJECT_NAME)]
    name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "obj")]
    format: Format,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn radii(&self) -> RadiusInput {
        if self.exterior.is_some() || self.interior.is_some() {
            RadiusInput::exterior_interior(
                self.exterior.unwrap_or(DEFAULT_EXTERIOR_RADIUS),
                self.interior.unwrap_or(DEFAULT_INTERIOR_RADIUS),
            )
        } else {
            RadiusInput::major_minor(
                self.major_radius.unwrap_or(DEFAULT_MAJOR_RADIUS),
                self.minor_radius.unwrap_or(DEFAULT_MINOR_RADIUS),
            )
        }
    }

    fn request(&self) -> TorusRequest {
        TorusRequest {
            radii: self.radii(),
            major_segments: self.major_segments,
            minor_segments: self.minor_segments,
            twists: self.twists,
        }
    }

    fn origin(&self) -> Result<DVec3> {
        match self.origin.as_slice() {
            [] => Ok(DVec3::ZERO),
            [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
            other => bail!("--origin takes x,y,z, got {} values", other.len()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("twisted-torus v{}", env!("CARGO_PKG_VERSION"));

    let origin = cli.origin()?;
    let mut builder = MeshObjectBuilder::named(cli.name.as_str());
    let object = add_twisted_torus(&mut builder, &cli.request(), origin)?;

    match &cli.output {
        Some(path) => {
            output::write_file(path, &object, cli.format)?;
            info!(path = %path.display(), "wrote mesh");
        }
        None => {
            let text = output::render(&object, cli.format)?;
            std::io::stdout().lock().write_all(text.as_bytes())?;
        }
    }

    Ok(())
}
