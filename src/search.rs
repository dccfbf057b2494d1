//! Searching on several threads.
//!
//! A dispatcher thread feeds wheel positions down a bounded channel to a pool
//! of checkers. Every checker builds its own [`Bombe`] from the shared,
//! read-only [`BombeConfig`], so trials never share mutable state.

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::num::NonZeroUsize;
use std::panic;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

use crate::bombe::{Bombe, BombeConfig};
use crate::error::Result;
use crate::letter::{Positions, POSITION_COUNT};
use crate::wheel::{ReflectorSpec, WheelSpec};

/// One checker per available core.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn kick_dispatcher(tx: Sender<Positions>, base: Positions) -> JoinHandle<()> {
    thread::spawn(move || {
        for steps in 0..POSITION_COUNT {
            if tx.send(base.odometer(steps)).is_err() {
                // every checker has gone
                return;
            }
        }
    })
}

fn boot_checker(
    id: usize,
    rx: Receiver<Positions>,
    tx: Sender<(Positions, bool)>,
    config: Arc<BombeConfig>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut bombe = Bombe::new(&config);
        let mut checked = 0usize;
        for positions in rx.iter() {
            let stop = bombe.check(positions);
            checked += 1;
            if tx.send((positions, stop)).is_err() {
                break;
            }
        }
        debug!("checker {} done after {} positions", id, checked);
    })
}

fn join(handle: JoinHandle<()>) {
    if let Err(cause) = handle.join() {
        panic::resume_unwind(cause);
    }
}

/// Every stop from the config's start signal, checked on `workers` threads.
///
/// Finds the same stops as [`Bombe::run_from`] with the same base, returned
/// in the same odometer order.
pub fn run_parallel(config: &BombeConfig, base: Positions, workers: usize) -> Vec<Positions> {
    let workers = workers.max(1);
    info!(
        "searching {} positions from {} on {} workers",
        POSITION_COUNT, base, workers
    );

    let shared = Arc::new(config.clone());
    let (job_tx, job_rx) = bounded(workers * 4);
    let (result_tx, result_rx) = unbounded();

    let checkers: Vec<_> = (0..workers)
        .map(|id| boot_checker(id, job_rx.clone(), result_tx.clone(), shared.clone()))
        .collect();
    drop(job_rx);
    drop(result_tx);
    let dispatcher = kick_dispatcher(job_tx, base);

    let mut stops: Vec<Positions> = result_rx
        .iter()
        .filter(|&(_, stop)| stop)
        .map(|(positions, _)| positions)
        .collect();

    join(dispatcher);
    for checker in checkers {
        join(checker);
    }

    stops.sort_by_key(|p| p.steps_from(base));
    info!("search finished with {} stops", stops.len());
    stops
}

/// Stops found for one wheel order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderStops {
    pub wheels: [String; 3],
    pub stops: Vec<Positions>,
}

/// Runs the search for every order of three different wheels drawn from
/// `wheel_names`, keeping the menu, start signal and flags of `template`.
pub fn search_wheel_orders(
    wheel_names: &[&str],
    reflector: &str,
    template: &BombeConfig,
    workers: usize,
) -> Result<Vec<OrderStops>> {
    let specs = wheel_names
        .iter()
        .map(|name| WheelSpec::named(name))
        .collect::<Result<Vec<_>>>()?;
    let reflector = ReflectorSpec::named(reflector)?;

    let mut results = Vec::new();
    for a in 0..specs.len() {
        for b in 0..specs.len() {
            if a == b {
                continue;
            }
            for c in 0..specs.len() {
                if a == c || b == c {
                    continue;
                }

                let config = BombeConfig {
                    wheels: [specs[a], specs[b], specs[c]],
                    reflector,
                    ..template.clone()
                };
                let wheels = [
                    wheel_names[a].to_string(),
                    wheel_names[b].to_string(),
                    wheel_names[c].to_string(),
                ];
                info!("wheel order {} {} {}", wheels[0], wheels[1], wheels[2]);
                let stops = run_parallel(&config, Positions::START, workers);
                results.push(OrderStops { wheels, stops });
            }
        }
    }
    Ok(results)
}
