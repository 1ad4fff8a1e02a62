use solsim::{ScenarioConfig, Scenario, StaticEphemeris};
use solsim::{CsvExport, Visualizer};
use solsim::{bench_force_matrix, bench_run};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Write the trajectories as CSV to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the timing harness instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_force_matrix()?;
        bench_run()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let ephemeris = StaticEphemeris::from(&scenario_cfg.ephemeris);

    let mut scenario = Scenario::build_scenario(&scenario_cfg, &ephemeris)?;
    let trajectory = scenario.run()?;
    let names = scenario.names();

    match args.output {
        Some(path) => {
            let mut export = CsvExport::create(&path)?;
            export.visualize(&names, &trajectory)?;
            info!("wrote {} rows per body to {}", trajectory.row_counter(), path.display());
        }
        None => {
            for (name, x) in names.iter().zip(trajectory.last().unwrap_or_default()) {
                println!("{:>10}: [{:e}, {:e}, {:e}] m", name, x.x, x.y, x.z);
            }
        }
    }

    Ok(())
}
