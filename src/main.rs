//! Orbital Tooltip CLI
//!
//! Usage:
//!   orbital-tooltip [OPTIONS] [SCENE]
//!
//! Options:
//!   -a, --angle <DEG>   Place every tooltip at this angle instead
//!   -s, --sweep <STEP>  Print positions for 0, STEP, 2*STEP, ... 360 degrees
//!   -e, --explain       Show sector bounds and the bearing of each placement
//!   -v, --verbose       Debug logging on stderr
//!   -h, --help          Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use orbital_tooltip::{Bearing, Placement, Scene, SceneError, TooltipError};

#[derive(Parser)]
#[command(name = "orbital-tooltip")]
#[command(about = "Compute where tooltips go around their anchors")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Place every tooltip at this angle (degrees, 0-360, clockwise from top)
    #[arg(short, long)]
    angle: Option<f64>,

    /// Print positions for a full orbit in steps of this many degrees
    #[arg(short, long)]
    sweep: Option<f64>,

    /// Show sector bounds and the bearing of each placement
    #[arg(short, long)]
    explain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Scene(#[from] SceneError),
    #[error("{0}")]
    Tooltip(#[from] TooltipError),
    #[error("sweep step must be a positive number of degrees, got {0}")]
    InvalidStep(f64),
    #[error(
        "sweep step {step} would produce {count} angles; at most {} allowed",
        MAX_SWEEP_ANGLES
    )]
    SweepTooFine { step: f64, count: f64 },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match run(&cli, &source) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, source: &str) -> Result<String, CliError> {
    let mut scene = Scene::from_str(source)?;
    let tooltips = scene.attach_all()?;

    let mut output = String::new();
    for tooltip in &tooltips {
        let angles = match (cli.sweep, cli.angle) {
            (Some(step), _) => sweep_angles(step)?,
            (None, Some(angle)) => vec![angle],
            (None, None) => vec![tooltip.options().orbit.angle_degrees()],
        };

        for angle in angles {
            let orbit = tooltip.orbit_at(angle)?;
            let placement = tooltip.place(&scene, &orbit)?;
            output.push_str(&format!(
                "{}\t{}\t{}\t{}",
                tooltip.anchor(),
                angle,
                placement.position.x,
                placement.position.y
            ));
            if cli.explain {
                output.push('\t');
                output.push_str(&explain(&placement));
            }
            output.push('\n');
        }
    }
    Ok(output)
}

/// Upper bound on the rows a single sweep prints per tooltip
const MAX_SWEEP_ANGLES: u32 = 3601;

fn sweep_angles(step: f64) -> Result<Vec<f64>, CliError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::InvalidStep(step));
    }
    let count = (360.0 / step).floor() + 1.0;
    if count > f64::from(MAX_SWEEP_ANGLES) {
        return Err(CliError::SweepTooFine { step, count });
    }

    // count is a whole number in 1..=MAX_SWEEP_ANGLES here
    Ok((0..count as u32)
        .map(|i| f64::from(i) * step)
        .filter(|angle| *angle <= 360.0)
        .collect())
}

fn explain(placement: &Placement) -> String {
    let b = &placement.bounds;
    let bearing = match placement.bearing {
        Bearing::Cardinal(side) => side.name().to_string(),
        Bearing::Leaning {
            side,
            corner,
            delta,
        } => format!("{} {}deg toward {}", side.name(), delta, corner.name()),
    };
    format!(
        "{} (bounds {}/{}/{}/{})",
        bearing, b.top_right, b.bottom_right, b.bottom_left, b.top_left
    )
}

fn print_intro() {
    println!(
        r#"Orbital Tooltip - compute where tooltips go around their anchors

USAGE:
    orbital-tooltip [OPTIONS] [SCENE]
    cat scene.toml | orbital-tooltip

OPTIONS:
    -a, --angle <DEG>    Place every tooltip at this angle
    -s, --sweep <STEP>   Full orbit in steps of STEP degrees
    -e, --explain        Show sector bounds and bearings
    -v, --verbose        Debug logging on stderr
    -h, --help           Print help

SCENE FORMAT:
    [elements.save]
    x = 60
    y = 80
    width = 80
    height = 40

    [[tooltips]]
    anchor = "save"
    width = 60
    height = 20
    angle = 45          # 0 top, 90 right, 180 bottom, 270 left
    spacing = 5         # gap between anchor and tooltip
    offset = 0          # nudge along the side
    tracking = "flush"  # or "radial"

Each line of output is: anchor, angle, x, y (tooltip top-left)."#
    );
}
