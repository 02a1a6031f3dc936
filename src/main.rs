use gravsim::{build_simulator, BodyId, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML in the `scenarios/` directory
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Committed ticks to run before querying
    #[arg(long, default_value_t = 0)]
    ticks: usize,

    /// Roster index of the body to predict
    #[arg(long, default_value_t = 0)]
    body: usize,

    /// Number of prediction steps
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Tick multiplier per prediction step (bigger = faster, less accurate)
    #[arg(long, default_value_t = 1)]
    step_size: u32,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut simulator = build_simulator(scenario_cfg)?;

    let dt = simulator.params().dt;
    for _ in 0..args.ticks {
        simulator.step(dt)?;
    }

    let target = BodyId(args.body);

    if let Some(influence) = simulator.strongest_influence(target)? {
        println!(
            "strongest influence on body {}: body {} (force {:.6})",
            args.body, influence.source.0, influence.magnitude
        );
    }

    let trajectory = simulator.trajectory(target, args.steps, args.step_size)?;

    println!("predicted {} positions", trajectory.path.len());
    if let Some(first) = trajectory.path.first() {
        println!("first: [{:.3}, {:.3}, {:.3}]", first.x, first.y, first.z);
    }
    if let Some(last) = trajectory.path.last() {
        println!("last:  [{:.3}, {:.3}, {:.3}]", last.x, last.y, last.z);
    }
    match trajectory.collision {
        Some(step) => println!("collision at step {step}"),
        None => println!("no collision within {} steps", args.steps),
    }

    Ok(())
}
