//! raynor_sim - Runs the built-in Raynor scenario and prints periodic snapshots

use anyhow::Result;
use raynor_core::prelude::*;

fn print_snapshot(snapshot: &Snapshot) {
    println!(
        "--- iteration {} (t={:.2}) ---",
        snapshot.iteration, snapshot.elapsed
    );
    for pair in &snapshot.pairs {
        println!("{}", pair.attacker);
        println!("{}", pair.target);
    }
}

fn main() -> Result<()> {
    // stdout carries the snapshots only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let scenario = default_scenario()?;
    let mut simulation = Simulation::from_config(&scenario, RaynorConstants::default())?;
    simulation.run(print_snapshot);

    Ok(())
}
