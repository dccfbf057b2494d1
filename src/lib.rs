//! A simulated Turing-Welchman bombe.
//!
//! Given a crib (a stretch of plaintext and the ciphertext it is believed to
//! encipher to) and a wheel order, the bombe tries all 17,576 wheel positions
//! and reports the "stops": positions whose implied plugboard is not
//! contradicted by the crib.
//!
//! The crib becomes a [`Menu`]; each menu item becomes a scrambler wired
//! between two banks of 26 wires ([`ConnectionGraph`]). For each trial the
//! scramblers are set, a signal is spread through the banks
//! ([`Propagation`]), and the resulting live wires are judged
//! ([`stop::evaluate`]).
//!
//! ```no_run
//! use bombe::{Bombe, BombeConfig};
//!
//! let config = BombeConfig::named(["I", "V", "III"], "B", "someplaintext", "dhnpforeeimgg")?;
//! let stops = Bombe::new(&config).run();
//! let same = bombe::search::run_parallel(&config, bombe::Positions::START, 4);
//! assert_eq!(stops, same);
//! # Ok::<(), bombe::BombeError>(())
//! ```

pub mod bank;
pub mod bombe;
pub mod config;
pub mod error;
pub mod graph;
pub mod letter;
pub mod menu;
pub mod propagation;
pub mod scrambler;
pub mod search;
pub mod stop;
pub mod wheel;

pub use crate::bank::{BankSet, PlugPair, Signal};
pub use crate::bombe::{Bombe, BombeConfig, Trial};
pub use crate::error::{BombeError, Result};
pub use crate::graph::{Connection, ConnectionGraph};
pub use crate::letter::{Letter, Positions};
pub use crate::menu::{Menu, MenuItem};
pub use crate::propagation::Propagation;
pub use crate::scrambler::Scrambler;
pub use crate::wheel::{ReflectorSpec, WheelSpec};
