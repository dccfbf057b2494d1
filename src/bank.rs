//! Banks of wires, and what a pattern of live wires says about the plugboard.
//!
//! There is one bank per letter and 26 wires in each bank. A live wire `w` in
//! bank `b` is the hypothesis "`b` is plugged to `w`".

use std::collections::BTreeSet;
use std::fmt;

use crate::letter::{Letter, ALPHABET};

/// Wire `wire` in bank `bank` is about to become live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signal {
    pub bank: Letter,
    pub wire: Letter,
}

impl Signal {
    pub fn new(bank: Letter, wire: Letter) -> Signal {
        Signal { bank, wire }
    }

    /// Bank and wire swapped, as the diagonal board connects them.
    pub fn mirrored(self) -> Signal {
        Signal {
            bank: self.wire,
            wire: self.bank,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.bank, self.wire)
    }
}

const ALL_WIRES: u32 = (1 << ALPHABET) - 1;

/// Live/dead state of all 676 wires, one bitmask per bank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BankSet([u32; ALPHABET]);

impl BankSet {
    pub fn new() -> BankSet {
        BankSet::default()
    }

    pub fn is_live(&self, signal: Signal) -> bool {
        self.0[signal.bank.index()] & (1 << signal.wire.index()) != 0
    }

    /// Returns `false` if the wire was already live.
    pub fn energise(&mut self, signal: Signal) -> bool {
        if self.is_live(signal) {
            return false;
        }
        self.0[signal.bank.index()] |= 1 << signal.wire.index();
        true
    }

    pub fn live_count(&self, bank: Letter) -> usize {
        self.0[bank.index()].count_ones() as usize
    }

    pub fn total_live(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_fully_live(&self, bank: Letter) -> bool {
        self.0[bank.index()] == ALL_WIRES
    }

    pub fn live_wires(&self, bank: Letter) -> impl Iterator<Item = Letter> + '_ {
        let mask = self.0[bank.index()];
        Letter::all().filter(move |w| mask & (1 << w.index()) != 0)
    }

    pub fn dead_wires(&self, bank: Letter) -> impl Iterator<Item = Letter> + '_ {
        let mask = self.0[bank.index()];
        Letter::all().filter(move |w| mask & (1 << w.index()) == 0)
    }

    /// Plugboard pairs implied by the live wires.
    ///
    /// A bank with exactly one live wire is plugged to that wire; a bank with
    /// exactly one dead wire is plugged to the dead one.
    pub fn implied_plugboard(&self) -> BTreeSet<PlugPair> {
        let mut pairs = BTreeSet::new();
        for bank in Letter::all() {
            let live = self.live_count(bank);
            if live == 1 {
                pairs.extend(self.live_wires(bank).map(|w| PlugPair::new(bank, w)));
            }
            if live == ALPHABET - 1 {
                pairs.extend(self.dead_wires(bank).map(|w| PlugPair::new(bank, w)));
            }
        }
        pairs
    }
}

/// An unordered pair of plugboard letters. A letter may be paired with
/// itself, meaning it is unplugged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlugPair(Letter, Letter);

impl PlugPair {
    pub fn new(a: Letter, b: Letter) -> PlugPair {
        if a <= b {
            PlugPair(a, b)
        } else {
            PlugPair(b, a)
        }
    }

    pub fn letters(&self) -> (Letter, Letter) {
        (self.0, self.1)
    }

    pub fn is_self_paired(&self) -> bool {
        self.0 == self.1
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 == letter || self.1 == letter
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_self_paired() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}{}", self.0, self.1)
        }
    }
}

/// True if no letter turns up in two different pairs.
pub fn is_consistent<'a, I>(pairs: I) -> bool
where
    I: IntoIterator<Item = &'a PlugPair>,
{
    let mut used = [false; ALPHABET];
    for pair in pairs {
        let (a, b) = pair.letters();
        if used[a.index()] || (!pair.is_self_paired() && used[b.index()]) {
            return false;
        }
        used[a.index()] = true;
        used[b.index()] = true;
    }
    true
}

/// Pairs joined as `"d:hl:os"`.
pub fn describe<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = &'a PlugPair>,
{
    pairs
        .into_iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn sig(bank: char, wire: char) -> Signal {
        Signal::new(l(bank), l(wire))
    }

    #[test]
    fn energise_once() {
        let mut banks = BankSet::new();
        assert!(banks.energise(sig('a', 'b')));
        assert!(!banks.energise(sig('a', 'b')));
        assert!(banks.is_live(sig('a', 'b')));
        assert!(!banks.is_live(sig('b', 'a')));
        assert_eq!(banks.total_live(), 1);
        assert_eq!(banks.live_count(l('a')), 1);
    }

    #[test]
    fn single_live_and_single_dead_wires_imply_pairs() {
        let mut banks = BankSet::new();
        banks.energise(sig('d', 'd'));
        banks.energise(sig('h', 'l'));
        for w in Letter::all().filter(|&w| w != l('s')) {
            banks.energise(Signal::new(l('o'), w));
        }
        assert!(!banks.is_fully_live(l('o')));
        let pairs = banks.implied_plugboard();
        assert_eq!(describe(&pairs), "d:hl:os");
        assert!(is_consistent(&pairs));
    }

    #[test]
    fn full_and_empty_banks_imply_nothing() {
        let mut banks = BankSet::new();
        for w in Letter::all() {
            banks.energise(Signal::new(l('t'), w));
        }
        assert!(banks.is_fully_live(l('t')));
        assert!(banks.implied_plugboard().is_empty());
    }

    #[test]
    fn shared_letters_are_inconsistent() {
        let pairs: BTreeSet<_> = vec![PlugPair::new(l('a'), l('b')), PlugPair::new(l('b'), l('c'))]
            .into_iter()
            .collect();
        assert!(!is_consistent(&pairs));

        let pairs: BTreeSet<_> = vec![PlugPair::new(l('a'), l('a')), PlugPair::new(l('a'), l('c'))]
            .into_iter()
            .collect();
        assert!(!is_consistent(&pairs));

        let pairs: BTreeSet<_> = vec![PlugPair::new(l('b'), l('a')), PlugPair::new(l('a'), l('b'))]
            .into_iter()
            .collect();
        assert_eq!(pairs.len(), 1);
        assert!(is_consistent(&pairs));
    }
}
