//! Two-die rolls.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::rng::GameRng;

/// Smallest die face.
pub const MIN_FACE: u8 = 1;

/// Largest die face; also the longest single movement.
pub const MAX_FACE: u8 = 6;

/// A roll of two dice.
///
/// Equality is value equality on the faces in the order rolled, so
/// `Dice::new(3, 5) != Dice::new(5, 3)`. Use [`Dice::canonical`] when the
/// order does not matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    die1: u8,
    die2: u8,
}

impl Dice {
    /// Create a specific roll.
    ///
    /// # Panics
    ///
    /// Panics if either face is outside 1..=6.
    #[must_use]
    pub fn new(die1: u8, die2: u8) -> Self {
        assert!(
            (MIN_FACE..=MAX_FACE).contains(&die1) && (MIN_FACE..=MAX_FACE).contains(&die2),
            "Die faces must be in 1..=6, got ({}, {})",
            die1,
            die2
        );
        Self { die1, die2 }
    }

    /// Roll both dice.
    pub fn roll(rng: &mut GameRng) -> Self {
        let die1 = rng.roll_die();
        let die2 = rng.roll_die();
        Self { die1, die2 }
    }

    /// All 36 ordered rolls.
    pub fn all() -> impl Iterator<Item = Dice> {
        (MIN_FACE..=MAX_FACE)
            .flat_map(|die1| (MIN_FACE..=MAX_FACE).map(move |die2| Dice { die1, die2 }))
    }

    /// The first die.
    #[must_use]
    pub fn die1(self) -> u8 {
        self.die1
    }

    /// The second die.
    #[must_use]
    pub fn die2(self) -> u8 {
        self.die2
    }

    /// Both faces in roll order.
    #[must_use]
    pub fn values(self) -> (u8, u8) {
        (self.die1, self.die2)
    }

    /// Both faces, highest first.
    #[must_use]
    pub fn canonical(self) -> (u8, u8) {
        (self.die1.max(self.die2), self.die1.min(self.die2))
    }

    /// Whether both dice show the same face.
    #[must_use]
    pub fn is_doubles(self) -> bool {
        self.die1 == self.die2
    }

    /// The die values available to a move: four copies for doubles,
    /// otherwise the two faces in roll order.
    #[must_use]
    pub fn faces(self) -> SmallVec<[u8; 4]> {
        if self.is_doubles() {
            smallvec![self.die1; 4]
        } else {
            smallvec![self.die1, self.die2]
        }
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dice: {} {}", self.die1, self.die2)
    }
}
