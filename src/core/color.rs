//! Piece colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of a backgammon game. Each color owns a direction of
//! travel and a home base: the virtual point just past its bear-off edge.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for bar and borne-off
//! counters and anything else kept once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of points on the board.
pub const NUM_POINTS: usize = 24;

/// Pieces per color.
pub const PIECES_PER_COLOR: u8 = 15;

/// A side in the game.
///
/// White travels from point 0 toward point 23 and bears off past 23.
/// Black travels the other way and bears off past point 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Slot index for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The virtual point this color bears off to: 24 for White, -1 for Black.
    #[must_use]
    pub const fn base(self) -> i32 {
        match self {
            Color::White => NUM_POINTS as i32,
            Color::Black => -1,
        }
    }

    /// Sign of travel toward the base.
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Single-character symbol used in move notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'O',
            Color::Black => 'X',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by a `[T; 2]`, one slot per color.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Color, ColorMap};
///
/// let mut bar: ColorMap<u8> = ColorMap::with_value(0);
/// bar[Color::Black] += 1;
///
/// assert_eq!(bar[Color::White], 0);
/// assert_eq!(bar[Color::Black], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a new ColorMap from one value per color.
    pub fn from_pair(white: T, black: T) -> Self {
        Self { data: [white, black] }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
