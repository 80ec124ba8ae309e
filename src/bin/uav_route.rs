use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use uav_route::io::{load_case, random_case, write_case, CaseShape, Report};
use uav_route::optimizer::{RouteOptimizer, UavConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the minimum-time route for a case file
    Solve(SolveArgs),
    /// Write a random case file
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Case file to solve
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with `speed` and `dwell_time`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cruising speed (default: 2.0)
    #[arg(long)]
    speed: Option<f64>,

    /// Dwell time at every visited point (default: 10.0)
    #[arg(long)]
    dwell_time: Option<f64>,

    /// Also print the visited point indices
    #[arg(short, long)]
    path: bool,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of intermediate waypoints
    #[arg(short = 'n', long, default_value_t = 10)]
    waypoints: usize,

    /// Seed for reproducible cases (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Coordinates are drawn from [0, extent]
    #[arg(long, default_value_t = 100.0)]
    extent: f64,

    /// Penalties are drawn from [0, max-penalty]
    #[arg(long, default_value_t = 100.0)]
    max_penalty: f64,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Solve(args) => solve(args),
        Commands::Generate(args) => generate(args),
    }
}

fn solve(args: SolveArgs) -> Result<(), anyhow::Error> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => UavConfig::default(),
    };
    if let Some(speed) = args.speed {
        config = config.with_speed(speed);
    }
    if let Some(dwell_time) = args.dwell_time {
        config = config.with_dwell_time(dwell_time);
    }
    let optimizer = RouteOptimizer::from_config(config)?;

    let route = load_case(&args.input)
        .with_context(|| format!("failed to load case {}", args.input.display()))?;
    info!(
        waypoints = route.num_waypoints(),
        speed = optimizer.speed(),
        dwell_time = optimizer.dwell_time(),
        "solving {}",
        args.input.display()
    );

    let solution = if args.path || args.json {
        optimizer.solve_with_path(&route)
    } else {
        optimizer.solve(&route)
    };
    info!(min_time = solution.min_time(), "solved");

    let report = Report::new(&solution);
    let mut out = open_output(args.output.as_deref())?;
    if args.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), anyhow::Error> {
    let shape = CaseShape::new(args.waypoints, args.extent, args.max_penalty)
        .context("extent and max-penalty must be finite and non-negative")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let route = random_case(&mut rng, &shape);
    info!(waypoints = route.num_waypoints(), seed = ?args.seed, "generated case");

    let mut out = open_output(args.output.as_deref())?;
    out.write_all(write_case(&route).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn read_config(path: &Path) -> Result<UavConfig, anyhow::Error> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config {}", path.display()))?;
    let config = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, anyhow::Error> {
    Ok(match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}
