use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use sq_core::{CompartmentId, atm, in_m, pressure_to_depth};
use sq_graph::{CompartmentGraph, Snapshot};
use sq_project::{VolumeOverride, apply_overrides, build_graph, default_model};
use sq_sim::DiveSession;
use sq_solver::{PressureSweep, Spacing};

mod error;

use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "sq-cli")]
#[command(about = "Squeeze CLI - air space volumes under diving pressure", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a model file
    Validate {
        /// Path to the model file (YAML or JSON)
        model_path: PathBuf,
    },
    /// List compartments and connections of a model
    Show {
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Compute compartment volumes at one pressure or depth
    Solve {
        #[command(flatten)]
        model: ModelArgs,
        #[command(flatten)]
        target: Target,
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute compartment volumes over a pressure range
    Sweep {
        #[command(flatten)]
        model: ModelArgs,
        /// First pressure in atm
        #[arg(long, default_value_t = 1.0)]
        from: f64,
        /// Last pressure in atm
        #[arg(long, default_value_t = 5.0)]
        to: f64,
        /// Number of points
        #[arg(long, default_value_t = 5)]
        points: usize,
        /// Space points logarithmically instead of linearly
        #[arg(long)]
        log: bool,
        /// Print the snapshots as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ModelArgs {
    /// Model file (YAML or JSON); the built-in human air spaces model if omitted
    #[arg(short, long)]
    model: Option<PathBuf>,
    /// Override a baseline volume, e.g. `--set lungs=4000` (repeatable)
    #[arg(long = "set", value_name = "NAME=ML")]
    overrides: Vec<VolumeOverride>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Target {
    /// Ambient pressure in atm
    #[arg(long)]
    pressure: Option<f64>,
    /// Seawater depth in meters (clamped to 0..=190)
    #[arg(long)]
    depth: Option<f64>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { model_path } => cmd_validate(&model_path),
        Commands::Show { model } => cmd_show(&model),
        Commands::Solve {
            model,
            target,
            json,
        } => cmd_solve(&model, &target, json),
        Commands::Sweep {
            model,
            from,
            to,
            points,
            log,
            json,
        } => {
            let spacing = if log {
                Spacing::Logarithmic
            } else {
                Spacing::Linear
            };
            cmd_sweep(&model, PressureSweep::new(from, to, points, spacing)?, json)
        }
    }
}

fn load_graph(args: &ModelArgs) -> CliResult<CompartmentGraph> {
    let mut model = match &args.model {
        Some(path) => sq_project::load_model(path)?,
        None => default_model(),
    };
    apply_overrides(&mut model, &args.overrides)?;
    tracing::debug!(
        model = %model.name,
        compartments = model.compartments.len(),
        "model loaded"
    );
    Ok(build_graph(&model)?)
}

fn cmd_validate(model_path: &Path) -> CliResult<()> {
    println!("Validating model: {}", model_path.display());
    let model = sq_project::load_model(model_path)?;
    build_graph(&model)?;
    println!(
        "✓ Model '{}' is valid ({} compartments)",
        model.name,
        model.compartments.len()
    );
    Ok(())
}

fn cmd_show(args: &ModelArgs) -> CliResult<()> {
    let graph = load_graph(args)?;

    println!("Compartments:");
    for c in graph.compartments() {
        let kind = if c.compressible { "compressible" } else { "rigid" };
        println!("  {:<16} {:>10.1} ml  {}", c.name, c.initial_volume, kind);
    }
    println!("Connections:");
    for (a, b) in graph.connections() {
        println!(
            "  {} - {}",
            compartment_name(&graph, a),
            compartment_name(&graph, b)
        );
    }
    println!(
        "Total: {:.1} ml ({:.1} ml compressible)",
        graph.total_initial_volume(),
        graph.compressible_capacity()
    );
    Ok(())
}

fn compartment_name(graph: &CompartmentGraph, id: CompartmentId) -> &str {
    graph
        .compartment(id)
        .map(|c| c.name.as_str())
        .unwrap_or("?")
}

fn cmd_solve(args: &ModelArgs, target: &Target, json: bool) -> CliResult<()> {
    let mut session = DiveSession::new(load_graph(args)?);
    match (target.pressure, target.depth) {
        (Some(p), _) => session.set_pressure(p)?,
        (None, Some(d)) => session.set_depth(d)?,
        (None, None) => {
            return Err(CliError::Input {
                what: "either --pressure or --depth is required".to_string(),
            });
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(session.current())?);
    } else {
        print!("{}", session.current());
        if let Some(depth) = session.depth() {
            println!("Depth: {depth:.1} m");
        }
    }
    Ok(())
}

fn cmd_sweep(args: &ModelArgs, sweep: PressureSweep, json: bool) -> CliResult<()> {
    let graph = load_graph(args)?;
    let snapshots = sweep.run(&graph, None)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    let names: Vec<&str> = snapshots
        .first()
        .map(|s| s.names().collect())
        .unwrap_or_default();
    print!("{:>10} {:>9} {:>10}", "atm", "depth_m", "total_ml");
    for name in &names {
        print!(" {name:>12}");
    }
    println!();
    for snap in &snapshots {
        print_row(snap, &names);
    }
    Ok(())
}

fn print_row(snap: &Snapshot, names: &[&str]) {
    let depth = pressure_to_depth(atm(snap.pressure()))
        .map(|d| format!("{:.1}", in_m(d)))
        .unwrap_or_else(|_| "-".to_string());
    print!(
        "{:>10.2} {:>9} {:>10.1}",
        snap.pressure(),
        depth,
        snap.total_volume()
    );
    for name in names {
        let v = snap.volume(name).unwrap_or(f64::NAN);
        print!(" {v:>12.2}");
    }
    println!();
}
