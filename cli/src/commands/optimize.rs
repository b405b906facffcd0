use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use catchment::{Map, Plan, SearchConfig};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::OptimizeArgs) -> Result<()> {
    let out_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("[optimize] Failed to read config {}", path.display()))?;
            serde_json::from_str::<SearchConfig>(&text)
                .with_context(|| format!("[optimize] Invalid config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    if let Some(trials) = args.trials { config = config.with_trials(trials) }
    if let Some(seed) = args.seed { config = config.with_seed(seed) }
    if args.serial { config = config.with_parallel(false) }
    config.validate()?;

    println!("[optimize] loading blocks from {}", args.input.blocks.display());
    let map = Arc::new(Map::read_from_files(&args.input.blocks, &args.input.distances)?);

    let plan = Plan::from_config(map, &config)?;
    let initial_z = plan.cumulative_z(&plan.global_stats());
    println!(
        "[optimize] {} blocks in {} districts, initial cumulative z-value {initial_z:.5}",
        plan.map().num_blocks(), plan.num_districts(),
    );

    println!("[optimize] running {} trials", config.trials);
    let outcome = plan.optimize(&config)?;
    println!(
        "[optimize] best trial {} of {} completed (seed {}), cumulative z-value {:.5}",
        outcome.best_trial, outcome.completed(), outcome.seed, outcome.best_z,
    );
    for failure in &outcome.failures {
        println!("[optimize] trial {} failed: {}", failure.trial, failure.error);
    }

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("[optimize] Failed to create {}", out_dir.display()))?;

    println!("[optimize] writing results to {}", out_dir.display());
    outcome.best.write_to_csv(&out_dir.join("assignment.csv"))?;
    outcome.best.write_geojson(&out_dir.join("districts.geojson"))?;
    outcome.write_curves_json(&out_dir.join("curves.json"))?;

    Ok(())
}
