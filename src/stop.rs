//! Deciding whether a propagated trial is a stop.

use std::collections::BTreeSet;

use crate::bank::{is_consistent, BankSet, PlugPair};
use crate::letter::Letter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Worth following up. Carries the implied plugboard when it was checked.
    Stop { plugboard: Option<BTreeSet<PlugPair>> },
    /// Every wire in the test bank went live.
    FullyLive,
    /// The implied plugboard pairs share a letter.
    InconsistentPlugboard(BTreeSet<PlugPair>),
}

impl Verdict {
    pub fn is_stop(&self) -> bool {
        matches!(self, Verdict::Stop { .. })
    }
}

/// A fully live test bank is never a stop, whatever `verify_plugboard` says.
pub fn evaluate(banks: &BankSet, test_bank: Letter, verify_plugboard: bool) -> Verdict {
    if banks.is_fully_live(test_bank) {
        return Verdict::FullyLive;
    }
    if !verify_plugboard {
        return Verdict::Stop { plugboard: None };
    }

    let pairs = banks.implied_plugboard();
    if is_consistent(&pairs) {
        Verdict::Stop {
            plugboard: Some(pairs),
        }
    } else {
        Verdict::InconsistentPlugboard(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Signal;

    fn l(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn full_bank_is_rejected_either_way() {
        let mut banks = BankSet::new();
        for w in Letter::all() {
            banks.energise(Signal::new(l('e'), w));
        }
        assert_eq!(evaluate(&banks, l('e'), true), Verdict::FullyLive);
        assert_eq!(evaluate(&banks, l('e'), false), Verdict::FullyLive);
        assert!(evaluate(&banks, l('f'), false).is_stop());
    }

    #[test]
    fn clashing_pairs_are_rejected_only_when_verifying() {
        let mut banks = BankSet::new();
        banks.energise(Signal::new(l('a'), l('b')));
        banks.energise(Signal::new(l('c'), l('b')));
        match evaluate(&banks, l('a'), true) {
            Verdict::InconsistentPlugboard(pairs) => assert_eq!(pairs.len(), 2),
            other => panic!("expected a clash, got {:?}", other),
        }
        assert_eq!(evaluate(&banks, l('a'), false), Verdict::Stop { plugboard: None });
    }

    #[test]
    fn consistent_pairs_are_reported() {
        let mut banks = BankSet::new();
        banks.energise(Signal::new(l('a'), l('b')));
        banks.energise(Signal::new(l('b'), l('a')));
        match evaluate(&banks, l('a'), true) {
            Verdict::Stop { plugboard: Some(pairs) } => {
                assert_eq!(pairs.into_iter().collect::<Vec<_>>(), vec![PlugPair::new(l('a'), l('b'))])
            }
            other => panic!("expected a stop, got {:?}", other),
        }
    }
}
