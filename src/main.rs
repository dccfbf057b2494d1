use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bombe::bank::describe;
use bombe::config::Job;
use bombe::search::run_parallel;
use bombe::Bombe;

fn main() -> bombe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bombe=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let path = env::args().nth(1).unwrap_or_else(|| "./input.json".to_string());
    info!("reading job from {}", path);
    let job = Job::load(&path)?;

    let stops = run_parallel(&job.config, job.start_positions, job.workers);

    println!("Stops: {}", stops.len());
    let mut bombe = Bombe::new(&job.config);
    for positions in stops {
        let trial = bombe.test_at(positions, None);
        match trial.plugboard() {
            Some(pairs) => println!("  {}  plugboard {}", positions, describe(pairs)),
            None => println!("  {}", positions),
        }
    }

    Ok(())
}
