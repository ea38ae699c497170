use solarsim::{RunConfig, Scenario, Session, StatsLog, TimeScale, Viewport};
use solarsim::{bench_gravity, bench_step_curve, write_scenario_file, BearingMode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solarsim")]
#[command(about = "Two-dimensional gravitational n-body simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scenario headless and log star/planet distance and speed
    Run {
        /// Scenario file, one `<Kind> <radius> <color> <mass> <x> <y> <vx> <vy>` per line
        scenario: PathBuf,

        /// YAML run configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of ticks, overrides the config
        #[arg(long)]
        ticks: Option<u64>,

        /// Model seconds per wall-clock second, overrides the config
        #[arg(long)]
        time_scale: Option<f64>,

        /// Stats log path, overrides the config
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Write the final state here, overrides the config
        #[arg(long)]
        dump: Option<PathBuf>,

        /// Use the epsilon bearing for output parity with older runs
        #[arg(long)]
        legacy_bearing: bool,
    },

    /// Time force accumulation and full steps for growing N
    Bench,
}

// load here to keep main clean
fn load_config(path: Option<&PathBuf>) -> Result<RunConfig> {
    match path {
        Some(p) => RunConfig::from_yaml_file(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(RunConfig::default()),
    }
}

#[allow(clippy::too_many_arguments)]
fn run(
    scenario_path: PathBuf,
    config: Option<PathBuf>,
    ticks: Option<u64>,
    time_scale: Option<f64>,
    stats: Option<PathBuf>,
    dump: Option<PathBuf>,
    legacy_bearing: bool,
) -> Result<()> {
    let mut cfg = load_config(config.as_ref())?;
    if let Some(t) = ticks {
        cfg.parameters.ticks = t;
    }
    if let Some(ts) = time_scale {
        cfg.parameters.time_scale = ts;
    }
    if stats.is_some() {
        cfg.output.stats = stats;
    }
    if dump.is_some() {
        cfg.output.dump = dump;
    }
    if legacy_bearing {
        cfg.engine.bearing = BearingMode::Legacy;
    }

    let scenario = Scenario::from_file(&scenario_path, &cfg)
        .with_context(|| format!("failed to load scenario {}", scenario_path.display()))?;

    let viewport = Viewport::fit(&scenario.state.bodies, cfg.viewport.width, cfg.viewport.height);
    tracing::info!("display scale {:.3e} px per unit", viewport.scale);

    let stats_log = match &cfg.output.stats {
        Some(p) => Some(
            StatsLog::create(p).with_context(|| format!("failed to create {}", p.display()))?,
        ),
        None => None,
    };

    let time_scale = TimeScale::new(cfg.parameters.time_scale).context("invalid --time-scale")?;
    let mut session = Session::new(scenario, time_scale, stats_log);

    println!("Modelling started!");
    let result = session.run(cfg.parameters.ticks, cfg.parameters.frame_interval);

    // the dump reflects the last valid state even when a step failed
    if let Some(p) = &cfg.output.dump {
        write_scenario_file(p, &session.scenario.state.bodies)
            .with_context(|| format!("failed to write {}", p.display()))?;
    }
    let model_time = session.scenario.state.t;
    session.into_stats()?;

    result.context("simulation stopped")?;
    println!("Modelling finished! {} model seconds passed", model_time);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            config,
            ticks,
            time_scale,
            stats,
            dump,
            legacy_bearing,
        } => run(scenario, config, ticks, time_scale, stats, dump, legacy_bearing),
        Commands::Bench => {
            bench_gravity();
            bench_step_curve();
            Ok(())
        }
    }
}
