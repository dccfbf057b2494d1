//! Spreading a signal through the banks.
//!
//! Breadth-first over (bank, wire) states. A signal whose wire is already
//! live is dropped, so each of the 676 states fires at most once and the
//! closure is the same whatever order the agenda is worked in.

use std::collections::VecDeque;

use crate::bank::{BankSet, Signal};
use crate::graph::ConnectionGraph;
use crate::letter::ALPHABET;

/// Upper bound on wires that can go live in one trial.
pub const MAX_TRANSITIONS: usize = ALPHABET * ALPHABET;

/// One propagation run from a single seed. Iterating yields each signal as
/// its wire goes live; [`Propagation::finish`] runs it to the fixed point.
pub struct Propagation<'g> {
    graph: &'g ConnectionGraph,
    use_diagonal_board: bool,
    banks: BankSet,
    pending: VecDeque<Signal>,
    transitions: usize,
}

impl<'g> Propagation<'g> {
    pub fn new(graph: &'g ConnectionGraph, start: Signal, use_diagonal_board: bool) -> Propagation<'g> {
        let mut pending = VecDeque::new();
        pending.push_back(start);
        Propagation {
            graph,
            use_diagonal_board,
            banks: BankSet::new(),
            pending,
            transitions: 0,
        }
    }

    pub fn banks(&self) -> &BankSet {
        &self.banks
    }

    /// Wires turned live so far.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Drains the agenda; returns the final bank state and transition count.
    pub fn finish(mut self) -> (BankSet, usize) {
        while self.next().is_some() {}
        (self.banks, self.transitions)
    }
}

impl<'g> Iterator for Propagation<'g> {
    type Item = Signal;

    fn next(&mut self) -> Option<Signal> {
        while let Some(current) = self.pending.pop_front() {
            if !self.banks.energise(current) {
                continue;
            }
            self.transitions += 1;

            if self.use_diagonal_board {
                self.pending.push_back(current.mirrored());
            }
            for c in self.graph.touching(current.bank) {
                let other_bank = c.other_bank(current.bank);
                let other_wire = c.scrambler.lookup(current.wire);
                self.pending.push_back(Signal::new(other_bank, other_wire));
            }
            return Some(current);
        }
        None
    }
}

/// Full closure of `start` over `graph`.
pub fn propagate(graph: &ConnectionGraph, start: Signal, use_diagonal_board: bool) -> (BankSet, usize) {
    Propagation::new(graph, start, use_diagonal_board).finish()
}
