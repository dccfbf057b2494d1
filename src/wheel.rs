//! Wheel and reflector wirings.
//!
//! A bombe only needs the substitution part of an Enigma wheel: no notches,
//! no ring settings. Wirings are declared as permutation tables over the
//! alphabet; reflectors may also be declared as a list of letter pairs.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::error::{BombeError, Result};
use crate::letter::{Letter, ALPHABET};

/// Fixed wiring of one wheel, plus its inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelSpec {
    mapper: [u8; ALPHABET],
    rev_mapper: [u8; ALPHABET],
}

/// Fixed wiring of a reflector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReflectorSpec([u8; ALPHABET]);

fn invalid(spec: &str, reason: &str) -> BombeError {
    BombeError::InvalidWiring {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}

/// Reads a 26-letter table, checking that it is a permutation.
fn parse_table(spec: &str) -> Result<[u8; ALPHABET]> {
    let letters: Vec<Letter> = spec
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Letter::from_char)
        .collect::<Result<_>>()
        .map_err(|_| invalid(spec, "wiring may only contain letters"))?;
    if letters.len() != ALPHABET {
        return Err(invalid(spec, "wiring must have 26 letters"));
    }

    let mut table = [0; ALPHABET];
    let mut seen = [false; ALPHABET];
    for (i, l) in letters.iter().enumerate() {
        if seen[l.index()] {
            return Err(invalid(spec, "wiring is not a permutation"));
        }
        seen[l.index()] = true;
        table[i] = l.index() as u8;
    }
    Ok(table)
}

impl WheelSpec {
    /// Wiring given as the letters `a..z` map to, e.g. `"ekmflgdqvzntowyhxuspaibrcj"`.
    pub fn parse(spec: &str) -> Result<WheelSpec> {
        let mapper = parse_table(spec)?;
        let mut rev_mapper = [0; ALPHABET];
        for i in 0..ALPHABET {
            rev_mapper[mapper[i] as usize] = i as u8;
        }
        Ok(WheelSpec { mapper, rev_mapper })
    }

    /// Catalogue wheel ("I" to "VIII") by name.
    pub fn named(name: &str) -> Result<WheelSpec> {
        WHEELS
            .get(name.to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| BombeError::UnknownWheel(name.to_string()))
    }

    /// Catalogue name, else a literal wiring table.
    pub fn resolve(name_or_wiring: &str) -> Result<WheelSpec> {
        match WheelSpec::named(name_or_wiring) {
            Ok(spec) => Ok(spec),
            Err(_) if name_or_wiring.chars().filter(|c| c.is_ascii_alphabetic()).count() == ALPHABET => {
                WheelSpec::parse(name_or_wiring)
            }
            Err(e) => Err(e),
        }
    }

    /// Signal entering the wheel at `position`, moving towards the reflector.
    pub fn forward(&self, position: Letter, letter: Letter) -> Letter {
        let shifted = letter.shifted(position.index());
        Letter::from_index(self.mapper[shifted.index()] as usize).unshifted(position.index())
    }

    /// Signal returning from the reflector; undoes [`WheelSpec::forward`].
    pub fn backward(&self, position: Letter, letter: Letter) -> Letter {
        let shifted = letter.shifted(position.index());
        Letter::from_index(self.rev_mapper[shifted.index()] as usize).unshifted(position.index())
    }
}

impl ReflectorSpec {
    /// Either a 26-letter table or 13 pairs such as `"ay br cu dh ..."`.
    /// The result must swap letters in pairs with no letter left in place.
    pub fn parse(spec: &str) -> Result<ReflectorSpec> {
        let words: Vec<&str> = spec.split_whitespace().collect();
        let table = if words.len() > 1 && words.iter().all(|w| w.chars().count() == 2) {
            let mut table = [u8::MAX; ALPHABET];
            for pair in words {
                let ends = crate::letter::letters(pair)
                    .map_err(|_| invalid(spec, "wiring may only contain letters"))?;
                let (a, b) = (ends[0].index(), ends[1].index());
                if table[a] != u8::MAX || table[b] != u8::MAX {
                    return Err(invalid(spec, "letter appears in two pairs"));
                }
                table[a] = b as u8;
                table[b] = a as u8;
            }
            if table.iter().any(|&t| t == u8::MAX) {
                return Err(invalid(spec, "reflector must pair every letter"));
            }
            table
        } else {
            parse_table(spec)?
        };

        for i in 0..ALPHABET {
            if table[i] as usize == i {
                return Err(invalid(spec, "reflector cannot map a letter to itself"));
            }
            if table[table[i] as usize] as usize != i {
                return Err(invalid(spec, "reflector is not an involution"));
            }
        }
        Ok(ReflectorSpec(table))
    }

    /// Catalogue reflector ("B" or "C") by name.
    pub fn named(name: &str) -> Result<ReflectorSpec> {
        REFLECTORS
            .get(name.to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| BombeError::UnknownReflector(name.to_string()))
    }

    /// Catalogue name, else a literal wiring.
    pub fn resolve(name_or_wiring: &str) -> Result<ReflectorSpec> {
        match ReflectorSpec::named(name_or_wiring) {
            Ok(spec) => Ok(spec),
            Err(_) if name_or_wiring.chars().filter(|c| c.is_ascii_alphabetic()).count() == ALPHABET => {
                ReflectorSpec::parse(name_or_wiring)
            }
            Err(e) => Err(e),
        }
    }

    pub fn forward(&self, letter: Letter) -> Letter {
        Letter::from_index(self.0[letter.index()] as usize)
    }
}

/// A wheel set at a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wheel {
    spec: WheelSpec,
    position: Letter,
}

impl Wheel {
    pub fn new(spec: WheelSpec, position: Letter) -> Wheel {
        Wheel { spec, position }
    }

    pub fn position(&self) -> Letter {
        self.position
    }

    pub fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    pub fn advance(&mut self) {
        self.position = self.position.shifted(1);
    }

    pub fn forward(&self, letter: Letter) -> Letter {
        self.spec.forward(self.position, letter)
    }

    pub fn backward(&self, letter: Letter) -> Letter {
        self.spec.backward(self.position, letter)
    }
}

/// Names of the catalogue wheels, in order.
pub const WHEEL_NAMES: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];

lazy_static! {
    static ref WHEELS: HashMap<&'static str, WheelSpec> = {
        let wirings = [
            "ekmflgdqvzntowyhxuspaibrcj",
            "ajdksiruxblhwtmcqgznpyfvoe",
            "bdfhjlcprtxvznyeiwgakmusqo",
            "esovpzjayquirhxlnftgkdcmwb",
            "vzbrgityupsdnhlxawmjqofeck",
            "jpgvoumfyqbenhzrdkasxlictw",
            "nzjhgrcxmyswboufaivlpekqdt",
            "fkqhtlxocbjspdzramewniuygv",
        ];
        WHEEL_NAMES
            .iter()
            .zip(wirings.iter())
            .filter_map(|(name, wiring)| WheelSpec::parse(wiring).ok().map(|spec| (*name, spec)))
            .collect()
    };
    static ref REFLECTORS: HashMap<&'static str, ReflectorSpec> = {
        let wirings = [
            ("B", "ay br cu dh eq fs gl ip jx kn mo tz vw"),
            ("C", "af bv cp dj ei go hy kr lz mx nw tq su"),
        ];
        wirings
            .iter()
            .filter_map(|(name, wiring)| ReflectorSpec::parse(wiring).ok().map(|spec| (*name, spec)))
            .collect()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn catalogue_is_complete() {
        for name in WHEEL_NAMES.iter() {
            assert!(WheelSpec::named(name).is_ok(), "{}", name);
        }
        assert!(ReflectorSpec::named("b").is_ok());
        assert!(ReflectorSpec::named("C").is_ok());
        assert!(matches!(WheelSpec::named("IX"), Err(BombeError::UnknownWheel(_))));
    }

    #[test]
    fn wheel_forward_and_backward_are_inverse() {
        let spec = WheelSpec::named("I").unwrap();
        for p in Letter::all() {
            let wheel = Wheel::new(spec, p);
            for x in Letter::all() {
                assert_eq!(wheel.backward(wheel.forward(x)), x);
            }
        }
        assert_eq!(Wheel::new(spec, Letter::A).forward(l('a')), l('e'));
        assert_eq!(Wheel::new(spec, l('b')).forward(l('a')), l('j'));
    }

    #[test]
    fn pair_and_table_reflectors_agree() {
        let pairs = ReflectorSpec::parse("ay br cu dh eq fs gl ip jx kn mo tz vw").unwrap();
        let table = ReflectorSpec::parse("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
        assert_eq!(pairs, table);
        for x in Letter::all() {
            assert_eq!(table.forward(table.forward(x)), x);
        }
    }

    #[test]
    fn malformed_wirings_are_rejected() {
        assert!(WheelSpec::parse("abc").is_err());
        assert!(WheelSpec::parse("aacdefghijklmnopqrstuvwxyz").is_err());
        assert!(ReflectorSpec::parse("abcdefghijklmnopqrstuvwxyz").is_err());
        assert!(ReflectorSpec::parse("ay ba cu dh eq fs gl ip jx kn mo tz vw").is_err());
        assert!(ReflectorSpec::parse("ay br").is_err());
    }

    #[test]
    fn wheel_advances_modulo_26() {
        let mut wheel = Wheel::new(WheelSpec::named("II").unwrap(), l('z'));
        wheel.advance();
        assert_eq!(wheel.position(), Letter::A);
    }
}
