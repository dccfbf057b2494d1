//! Menus: the letter pairs a crib implies.

use crate::error::Result;
use crate::letter::{letters, Letter, ALPHABET};

/// One crib position: `before` enciphers to `after` at `number` (from 1).
/// Scrambler offsets come from the item's place in the menu, not `number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub before: Letter,
    pub after: Letter,
    pub number: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu(Vec<MenuItem>);

impl Menu {
    /// Pairs the texts letter by letter.
    ///
    /// No check is made that this is a viable crib: texts of different
    /// lengths are paired up to the shorter one, and a letter may encipher
    /// to itself.
    pub fn new(plaintext: &[Letter], ciphertext: &[Letter]) -> Menu {
        Menu(
            plaintext
                .iter()
                .zip(ciphertext.iter())
                .enumerate()
                .map(|(i, (&before, &after))| MenuItem {
                    before,
                    after,
                    number: i + 1,
                })
                .collect(),
        )
    }

    /// As [`Menu::new`], from text. Fails only on characters that are not letters.
    pub fn from_crib(plaintext: &str, ciphertext: &str) -> Result<Menu> {
        Ok(Menu::new(&letters(plaintext)?, &letters(ciphertext)?))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letter occurring most often across both texts. Ties go to the letter
    /// seen first, counting all `before` letters ahead of the `after` ones.
    pub fn most_common_letter(&self) -> Option<Letter> {
        let mut counts = [0usize; ALPHABET];
        let mut order = Vec::with_capacity(ALPHABET);
        let seen = self
            .0
            .iter()
            .map(|m| m.before)
            .chain(self.0.iter().map(|m| m.after));
        for letter in seen {
            if counts[letter.index()] == 0 {
                order.push(letter);
            }
            counts[letter.index()] += 1;
        }

        let mut best: Option<Letter> = None;
        for letter in order {
            match best {
                Some(b) if counts[b.index()] >= counts[letter.index()] => {}
                _ => best = Some(letter),
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn numbers_from_one() {
        let menu = Menu::from_crib("abc", "xyz").unwrap();
        let numbers: Vec<usize> = menu.iter().map(|m| m.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(menu.items()[1].before, l('b'));
        assert_eq!(menu.items()[1].after, l('y'));
    }

    #[test]
    fn crib_is_not_validated() {
        let menu = Menu::from_crib("aaaa", "ab").unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.items()[0].before, menu.items()[0].after);
        assert!(Menu::from_crib("", "").unwrap().is_empty());
        assert!(Menu::from_crib("a b", "xyz").is_err());
    }

    #[test]
    fn most_common_letter() {
        let menu = Menu::from_crib("thisisatestmessage", "opgndxcrwomnlnecjz").unwrap();
        assert_eq!(menu.most_common_letter(), Some(l('s')));

        let menu = Menu::from_crib("someplaintext", "dhnpforeeimgg").unwrap();
        assert_eq!(menu.most_common_letter(), Some(l('e')));

        assert_eq!(Menu::default().most_common_letter(), None);
    }

    #[test]
    fn scrambler_offsets_follow_menu_order_not_numbers() {
        use crate::graph::ConnectionGraph;
        use crate::wheel::{ReflectorSpec, WheelSpec};

        let item = |before, after| MenuItem {
            before: l(before),
            after: l(after),
            number: 0,
        };
        let menu = Menu(vec![item('a', 'b'), item('c', 'd')]);
        let graph = ConnectionGraph::from_menu(
            &menu,
            [WheelSpec::named("I").unwrap(); 3],
            ReflectorSpec::named("B").unwrap(),
        );
        let positions: Vec<String> = graph
            .connections()
            .iter()
            .map(|c| c.scrambler.positions().to_string())
            .collect();
        assert_eq!(positions, vec!["aaa", "aab"]);
    }

    #[test]
    fn ties_go_to_first_seen() {
        // x turns up first in the crib, but plaintext letters are counted first
        let menu = Menu::from_crib("ayy", "xxb").unwrap();
        assert_eq!(menu.most_common_letter(), Some(l('y')));
        let menu = Menu::from_crib("qx", "xq").unwrap();
        assert_eq!(menu.most_common_letter(), Some(l('q')));
    }
}
