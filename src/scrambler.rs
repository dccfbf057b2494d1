//! Three wheels and a reflector acting as one substitution.

use crate::letter::{Letter, Positions};
use crate::wheel::{ReflectorSpec, Wheel, WheelSpec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scrambler {
    wheels: [Wheel; 3],
    reflector: ReflectorSpec,
}

impl Scrambler {
    pub fn new(wheels: [WheelSpec; 3], reflector: ReflectorSpec, positions: Positions) -> Scrambler {
        let [w1, w2, w3] = wheels;
        let [p1, p2, p3] = positions.0;
        Scrambler {
            wheels: [Wheel::new(w1, p1), Wheel::new(w2, p2), Wheel::new(w3, p3)],
            reflector,
        }
    }

    pub fn positions(&self) -> Positions {
        Positions::new(
            self.wheels[0].position(),
            self.wheels[1].position(),
            self.wheels[2].position(),
        )
    }

    pub fn set_positions(&mut self, positions: Positions) {
        for (wheel, p) in self.wheels.iter_mut().zip(positions.0.iter()) {
            wheel.set_position(*p);
        }
    }

    /// Moves the chosen wheels on by one, independently; no carries.
    pub fn advance(&mut self, wheel1: bool, wheel2: bool, wheel3: bool) {
        let chosen = [wheel1, wheel2, wheel3];
        for (wheel, &go) in self.wheels.iter_mut().zip(chosen.iter()) {
            if go {
                wheel.advance();
            }
        }
    }

    /// Advances only the fastest wheel.
    pub fn step(&mut self) {
        self.advance(false, false, true);
    }

    /// Through wheels 3, 2, 1, the reflector, and back out through 1, 2, 3.
    /// At any fixed position this is its own inverse.
    pub fn lookup(&self, letter: Letter) -> Letter {
        let [w1, w2, w3] = &self.wheels;
        let a = w3.forward(letter);
        let b = w2.forward(a);
        let c = w1.forward(b);
        let d = self.reflector.forward(c);
        let e = w1.backward(d);
        let f = w2.backward(e);
        w3.backward(f)
    }
}
