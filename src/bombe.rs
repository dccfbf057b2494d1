//! A whole bombe: wheel order, menu, and the search over wheel positions.

use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::bank::{BankSet, PlugPair, Signal};
use crate::error::{BombeError, Result};
use crate::graph::ConnectionGraph;
use crate::letter::{Positions, ALPHABET, POSITION_COUNT};
use crate::menu::Menu;
use crate::propagation::propagate;
use crate::stop::{evaluate, Verdict};
use crate::wheel::{ReflectorSpec, WheelSpec};

/// Everything needed to build a bombe. Immutable once made, cheap to clone,
/// and all a worker thread needs to build its own machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BombeConfig {
    pub wheels: [WheelSpec; 3],
    pub reflector: ReflectorSpec,
    pub menu: Menu,
    pub start: Signal,
    pub use_diagonal_board: bool,
    pub verify_plugboard: bool,
}

impl BombeConfig {
    /// Starts testing from the menu's most common letter, with the diagonal
    /// board and plugboard verification both on.
    pub fn new(wheels: [WheelSpec; 3], reflector: ReflectorSpec, menu: Menu) -> Result<BombeConfig> {
        let letter = menu.most_common_letter().ok_or(BombeError::EmptyMenu)?;
        Ok(BombeConfig {
            wheels,
            reflector,
            menu,
            start: Signal::new(letter, letter),
            use_diagonal_board: true,
            verify_plugboard: true,
        })
    }

    /// Catalogue wheels and reflector by name, and a crib.
    pub fn named(wheels: [&str; 3], reflector: &str, plaintext: &str, ciphertext: &str) -> Result<BombeConfig> {
        let [a, b, c] = wheels;
        BombeConfig::new(
            [WheelSpec::named(a)?, WheelSpec::named(b)?, WheelSpec::named(c)?],
            ReflectorSpec::named(reflector)?,
            Menu::from_crib(plaintext, ciphertext)?,
        )
    }

    pub fn with_start_signal(mut self, start: Signal) -> BombeConfig {
        self.start = start;
        self
    }

    pub fn with_diagonal_board(mut self, on: bool) -> BombeConfig {
        self.use_diagonal_board = on;
        self
    }

    pub fn with_plugboard_verification(mut self, on: bool) -> BombeConfig {
        self.verify_plugboard = on;
        self
    }
}

/// Outcome of testing one wheel position. Owns its bank state; nothing is
/// shared with other trials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trial {
    pub positions: Positions,
    pub start: Signal,
    pub banks: BankSet,
    pub transitions: usize,
    pub verdict: Verdict,
}

impl Trial {
    pub fn is_stop(&self) -> bool {
        self.verdict.is_stop()
    }

    /// The implied plugboard, if this is a stop and it was checked.
    pub fn plugboard(&self) -> Option<&BTreeSet<PlugPair>> {
        match &self.verdict {
            Verdict::Stop { plugboard } => plugboard.as_ref(),
            _ => None,
        }
    }

    /// Plugboard pairs implied by the banks, whatever the verdict.
    pub fn possible_plugboards(&self) -> BTreeSet<PlugPair> {
        self.banks.implied_plugboard()
    }
}

#[derive(Clone, Debug)]
pub struct Bombe {
    wheels: [WheelSpec; 3],
    reflector: ReflectorSpec,
    graph: ConnectionGraph,
    start: Signal,
    use_diagonal_board: bool,
    verify_plugboard: bool,
}

impl Bombe {
    pub fn new(config: &BombeConfig) -> Bombe {
        Bombe {
            wheels: config.wheels,
            reflector: config.reflector,
            graph: ConnectionGraph::from_menu(&config.menu, config.wheels, config.reflector),
            start: config.start,
            use_diagonal_board: config.use_diagonal_board,
            verify_plugboard: config.verify_plugboard,
        }
    }

    /// Rewires the machine for a new menu and resets the start signal to the
    /// menu's most common letter. Scramblers go back to the base `aaa`.
    pub fn read_menu(&mut self, menu: &Menu) -> Result<()> {
        let letter = menu.most_common_letter().ok_or(BombeError::EmptyMenu)?;
        self.graph = ConnectionGraph::from_menu(menu, self.wheels, self.reflector);
        self.start = Signal::new(letter, letter);
        Ok(())
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }

    /// The default start signal.
    pub fn start(&self) -> Signal {
        self.start
    }

    pub fn set_positions(&mut self, base: Positions) {
        self.graph.set_positions(base);
    }

    pub fn positions(&self) -> Positions {
        self.graph.positions().unwrap_or(Positions::START)
    }

    /// Tests the current positions, seeding propagation with `start` (or the
    /// default start signal). The verdict always looks at the default start
    /// signal's bank, whichever signal seeded the trial.
    pub fn test(&self, start: Option<Signal>) -> Trial {
        let start = start.unwrap_or(self.start);
        let (banks, transitions) = propagate(&self.graph, start, self.use_diagonal_board);
        let verdict = evaluate(&banks, self.start.bank, self.verify_plugboard);
        Trial {
            positions: self.positions(),
            start,
            banks,
            transitions,
            verdict,
        }
    }

    pub fn test_at(&mut self, positions: Positions, start: Option<Signal>) -> Trial {
        self.set_positions(positions);
        self.test(start)
    }

    /// Is `positions` a stop, from the default start signal?
    pub fn check(&mut self, positions: Positions) -> bool {
        self.test_at(positions, None).is_stop()
    }

    /// Every stop, trying all positions in odometer order from `aaa`.
    pub fn run(&mut self) -> Vec<Positions> {
        self.run_from(Positions::START, None)
    }

    /// Every stop, trying all positions in odometer order from `base`.
    pub fn run_from(&mut self, base: Positions, start: Option<Signal>) -> Vec<Positions> {
        let start = start.unwrap_or(self.start);
        info!(
            "searching {} positions from {} with start signal {} over {} connections",
            POSITION_COUNT,
            base,
            start,
            self.graph.len()
        );

        let mut stops = Vec::new();
        self.set_positions(base);
        for run_index in 0..POSITION_COUNT {
            let trial = self.test(Some(start));
            if trial.is_stop() {
                debug!("stop at {}", trial.positions);
                stops.push(trial.positions);
            }

            let advance2 = (run_index + 1) % ALPHABET == 0;
            let advance1 = (run_index + 1) % (ALPHABET * ALPHABET) == 0;
            if advance1 {
                debug!("{} / {} positions tried, {} stops", run_index + 1, POSITION_COUNT, stops.len());
            }
            self.graph.advance(advance1, advance2, true);
        }

        info!("search finished with {} stops", stops.len());
        stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Letter;

    fn sig(bank: char, wire: char) -> Signal {
        Signal::new(Letter::from_char(bank).unwrap(), Letter::from_char(wire).unwrap())
    }

    fn sample() -> Bombe {
        let config = BombeConfig::named(["I", "II", "III"], "B", "thisisatestmessage", "opgndxcrwomnlnecjz").unwrap();
        Bombe::new(&config)
    }

    #[test]
    fn default_start_is_most_common_letter() {
        assert_eq!(sample().start(), sig('s', 's'));
    }

    #[test]
    fn empty_menu_needs_a_start_signal() {
        assert!(matches!(
            BombeConfig::named(["I", "II", "III"], "B", "", ""),
            Err(BombeError::EmptyMenu)
        ));
        let mut bombe = sample();
        assert!(bombe.read_menu(&Menu::default()).is_err());
    }

    #[test]
    fn read_menu_rewires() {
        let mut bombe = sample();
        bombe.set_positions("xyz".parse().unwrap());
        bombe.read_menu(&Menu::from_crib("someplaintext", "dhnpforeeimgg").unwrap()).unwrap();
        assert_eq!(bombe.graph().len(), 13);
        assert_eq!(bombe.start(), sig('e', 'e'));
        assert_eq!(bombe.positions(), Positions::START);
    }

    #[test]
    fn verdict_reads_the_default_start_bank() {
        let bombe = sample();
        // seeding at t fills bank t, but bank s is the one judged
        let trial = bombe.test(Some(sig('t', 't')));
        assert!(trial.banks.is_fully_live(sig('t', 't').bank));
        let expected = evaluate(&trial.banks, sig('s', 's').bank, true);
        assert_eq!(trial.verdict, expected);

        let reseeded = Bombe::new(
            &BombeConfig::named(["I", "II", "III"], "B", "thisisatestmessage", "opgndxcrwomnlnecjz")
                .unwrap()
                .with_start_signal(sig('t', 't')),
        );
        assert_eq!(reseeded.test(None).verdict, Verdict::FullyLive);
    }

    #[test]
    fn trials_do_not_share_state() {
        let mut bombe = sample();
        let first = bombe.test(Some(sig('t', 't')));
        let _ = bombe.test_at("aab".parse().unwrap(), None);
        let again = bombe.test_at(Positions::START, Some(sig('t', 't')));
        assert_eq!(first, again);
    }

    #[test]
    fn run_visits_every_position_once() {
        let mut bombe = sample();
        bombe.set_positions("qrs".parse().unwrap());
        let stops = bombe.run_from("qrs".parse().unwrap(), None);
        // after a full cycle every wheel is back where it started
        assert_eq!(bombe.positions().to_string(), "qrs");
        let mut sorted = stops.clone();
        sorted.sort_by_key(|p| p.steps_from("qrs".parse().unwrap()));
        assert_eq!(sorted, stops);
        for p in stops {
            assert!(bombe.check(p));
        }
    }
}
