//! How the scramblers connect the banks.
//!
//! Each menu item gets its own scrambler wired between the banks of its two
//! letters. Scrambler `i` always sits `i` steps of the fastest wheel ahead of
//! scrambler 0, so setting one base position tests the whole crib at once.

use crate::letter::{Letter, Positions, ALPHABET};
use crate::menu::Menu;
use crate::scrambler::Scrambler;
use crate::wheel::{ReflectorSpec, WheelSpec};

/// A scrambler wired between two banks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub banks: [Letter; 2],
    pub scrambler: Scrambler,
}

impl Connection {
    /// The bank at the far end from `bank`; a bank wired to itself is its own
    /// far end.
    pub fn other_bank(&self, bank: Letter) -> Letter {
        if self.banks[0] == bank {
            self.banks[1]
        } else {
            self.banks[0]
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionGraph {
    connections: Vec<Connection>,
    // indices into `connections`, per bank
    touching: Vec<Vec<usize>>,
}

impl ConnectionGraph {
    pub fn from_menu(menu: &Menu, wheels: [WheelSpec; 3], reflector: ReflectorSpec) -> ConnectionGraph {
        let mut graph = ConnectionGraph {
            connections: Vec::with_capacity(menu.len()),
            touching: vec![Vec::new(); ALPHABET],
        };
        for (i, item) in menu.iter().enumerate() {
            let positions = Positions::START.with_wheel3_offset(i);
            let scrambler = Scrambler::new(wheels, reflector, positions);
            graph.add_connection(item.before, item.after, scrambler);
        }
        graph
    }

    pub fn add_connection(&mut self, before: Letter, after: Letter, scrambler: Scrambler) {
        let index = self.connections.len();
        self.touching[before.index()].push(index);
        if after != before {
            self.touching[after.index()].push(index);
        }
        self.connections.push(Connection {
            banks: [before, after],
            scrambler,
        });
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Connections with an end at `bank`, in menu order.
    pub fn touching(&self, bank: Letter) -> impl Iterator<Item = &Connection> + '_ {
        self.touching[bank.index()]
            .iter()
            .map(move |&i| &self.connections[i])
    }

    /// Connection `i` is set to `base` with its fastest wheel moved on `i` steps.
    pub fn set_positions(&mut self, base: Positions) {
        for (i, c) in self.connections.iter_mut().enumerate() {
            c.scrambler.set_positions(base.with_wheel3_offset(i));
        }
    }

    /// Advances the same wheels of every scrambler.
    pub fn advance(&mut self, wheel1: bool, wheel2: bool, wheel3: bool) {
        for c in self.connections.iter_mut() {
            c.scrambler.advance(wheel1, wheel2, wheel3);
        }
    }

    /// Base position: that of the first scrambler.
    pub fn positions(&self) -> Option<Positions> {
        self.connections.first().map(|c| c.scrambler.positions())
    }
}
