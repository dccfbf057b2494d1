//! JSON job files for the `bombe` binary.
//!
//! ```json
//! { "wheels": ["I", "V", "III"], "reflector": "B",
//!   "plain": "someplaintext", "cipher": "dhnpforeeimgg" }
//! ```
//!
//! Wheels and reflector are catalogue names or literal wirings. Optional
//! fields: `start_signal` (bank then wire, e.g. `"so"`), `start_positions`,
//! `use_diagonal_board`, `verify_plugboard`, `workers`.

use serde::Deserialize;
use std::convert::TryFrom;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::bank::Signal;
use crate::bombe::BombeConfig;
use crate::error::{BombeError, Result};
use crate::letter::{letters, Positions};
use crate::menu::Menu;
use crate::search::default_workers;
use crate::wheel::{ReflectorSpec, WheelSpec};

fn on() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawJob {
    pub wheels: [String; 3],
    pub reflector: String,
    pub plain: String,
    pub cipher: String,
    #[serde(default)]
    pub start_signal: Option<String>,
    #[serde(default)]
    pub start_positions: Option<Positions>,
    #[serde(default = "on")]
    pub use_diagonal_board: bool,
    #[serde(default = "on")]
    pub verify_plugboard: bool,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// A validated job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub config: BombeConfig,
    pub start_positions: Positions,
    pub workers: usize,
}

impl Job {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Job> {
        let reader = BufReader::new(File::open(path)?);
        let raw: RawJob = serde_json::from_reader(reader)?;
        Job::try_from(raw)
    }

    pub fn parse(json: &str) -> Result<Job> {
        let raw: RawJob = serde_json::from_str(json)?;
        Job::try_from(raw)
    }
}

fn parse_signal(text: &str) -> Result<Signal> {
    match letters(text.trim())?.as_slice() {
        &[bank, wire] => Ok(Signal::new(bank, wire)),
        _ => Err(BombeError::InvalidSignal(text.to_string())),
    }
}

impl TryFrom<RawJob> for Job {
    type Error = BombeError;

    fn try_from(raw: RawJob) -> Result<Job> {
        let [w1, w2, w3] = &raw.wheels;
        let wheels = [
            WheelSpec::resolve(w1)?,
            WheelSpec::resolve(w2)?,
            WheelSpec::resolve(w3)?,
        ];
        let reflector = ReflectorSpec::resolve(&raw.reflector)?;
        let menu = Menu::from_crib(&raw.plain, &raw.cipher)?;

        let config = match raw.start_signal.as_deref() {
            Some(text) => {
                let start = parse_signal(text)?;
                match BombeConfig::new(wheels, reflector, menu.clone()) {
                    Ok(config) => config.with_start_signal(start),
                    Err(BombeError::EmptyMenu) => BombeConfig {
                        wheels,
                        reflector,
                        menu,
                        start,
                        use_diagonal_board: true,
                        verify_plugboard: true,
                    },
                    Err(e) => return Err(e),
                }
            }
            None => BombeConfig::new(wheels, reflector, menu)?,
        }
        .with_diagonal_board(raw.use_diagonal_board)
        .with_plugboard_verification(raw.verify_plugboard);

        Ok(Job {
            config,
            start_positions: raw.start_positions.unwrap_or(Positions::START),
            workers: raw.workers.unwrap_or_else(default_workers).max(1),
        })
    }
}
