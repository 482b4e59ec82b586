//! Board state: points, bar, and borne-off pieces.
//!
//! ## Layout
//!
//! Points are indexed 0..24. White moves up toward 24, Black moves down
//! toward -1. A point holds pieces of at most one color; its owner is
//! `None` exactly when its count is zero.
//!
//! ## Invariants
//!
//! For each color: pieces on points + bar + off == 15. Movement
//! application keeps this; hand-built boards can be checked with
//! [`Board::validate`].
//!
//! ## Snapshots
//!
//! `Board` is a small value type. [`Board::scratch`] makes an independent
//! copy that can be mutated to explore a continuation without touching
//! the source.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap, NUM_POINTS, PIECES_PER_COLOR};
use super::error::BoardError;

/// Initial layout as (point, count, color).
const INITIAL_LAYOUT: [(usize, u8, Color); 8] = [
    (0, 2, Color::White),
    (5, 5, Color::Black),
    (7, 3, Color::Black),
    (11, 5, Color::White),
    (12, 5, Color::Black),
    (16, 3, Color::White),
    (18, 5, Color::White),
    (23, 2, Color::Black),
];

/// Points in a home quadrant.
const HOME_SIZE: i32 = 6;

/// Length of a [`BoardKey`]: count and owner per point, then bar and off per color.
const KEY_LEN: usize = NUM_POINTS * 2 + 4;

/// A backgammon position.
///
/// Equality and hashing cover every point, owner, bar and off counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    counts: [u8; NUM_POINTS],
    owners: [Option<Color>; NUM_POINTS],
    bar: ColorMap<u8>,
    off: ColorMap<u8>,
}

/// Canonical serialized form of a board, used as a set key when
/// collapsing moves that reach the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey([u8; KEY_LEN]);

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board in the starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (point, count, color) in INITIAL_LAYOUT {
            board.set_point(point, color, count);
        }
        board
    }

    /// Create a board with no pieces anywhere.
    ///
    /// Not a legal position on its own; place pieces with
    /// [`Board::set_point`], [`Board::set_bar`] and [`Board::set_off`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            counts: [0; NUM_POINTS],
            owners: [None; NUM_POINTS],
            bar: ColorMap::with_value(0),
            off: ColorMap::with_value(0),
        }
    }

    // === Setup ===

    /// Put `count` pieces of `color` on a point, replacing what was there.
    pub fn set_point(&mut self, point: usize, color: Color, count: u8) -> &mut Self {
        self.counts[point] = count;
        self.owners[point] = (count > 0).then_some(color);
        self
    }

    /// Set a color's bar counter.
    pub fn set_bar(&mut self, color: Color, count: u8) -> &mut Self {
        self.bar[color] = count;
        self
    }

    /// Set a color's borne-off counter.
    pub fn set_off(&mut self, color: Color, count: u8) -> &mut Self {
        self.off[color] = count;
        self
    }

    /// Check both board invariants.
    pub fn validate(&self) -> Result<(), BoardError> {
        for point in 0..NUM_POINTS {
            let count = self.counts[point];
            let owner = self.owners[point];
            if (count == 0) != owner.is_none() {
                return Err(BoardError::OwnerMismatch { point, count, owner });
            }
        }

        for color in Color::ALL {
            let total = self.total_pieces(color);
            if total != u32::from(PIECES_PER_COLOR) {
                return Err(BoardError::PieceCount { color, total });
            }
        }

        Ok(())
    }

    // === Accessors ===

    /// Owner of a point, `None` when empty.
    #[must_use]
    pub fn color_at(&self, point: usize) -> Option<Color> {
        self.owners[point]
    }

    /// Number of pieces on a point, of either color.
    #[must_use]
    pub fn pieces(&self, point: usize) -> u8 {
        self.counts[point]
    }

    /// Number of `color` pieces on a point; 0 if the other color holds it.
    #[must_use]
    pub fn pieces_of(&self, color: Color, point: usize) -> u8 {
        if self.owners[point] == Some(color) {
            self.counts[point]
        } else {
            0
        }
    }

    /// Pieces of `color` on the bar.
    #[must_use]
    pub fn bar(&self, color: Color) -> u8 {
        self.bar[color]
    }

    /// Pieces on the bar of both colors.
    #[must_use]
    pub fn bar_total(&self) -> u8 {
        self.bar[Color::White] + self.bar[Color::Black]
    }

    /// Pieces of `color` borne off.
    #[must_use]
    pub fn off(&self, color: Color) -> u8 {
        self.off[color]
    }

    /// Pieces borne off of both colors.
    #[must_use]
    pub fn off_total(&self) -> u8 {
        self.off[Color::White] + self.off[Color::Black]
    }

    /// Points occupied by `color`, in index order.
    pub fn occupied(&self, color: Color) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_POINTS).filter(move |&point| self.owners[point] == Some(color))
    }

    /// Pieces of `color` on points, bar and off.
    #[must_use]
    pub fn total_pieces(&self, color: Color) -> u32 {
        let on_points: u32 = self.occupied(color).map(|p| u32::from(self.counts[p])).sum();
        on_points + u32::from(self.bar[color]) + u32::from(self.off[color])
    }

    /// Pips `color` still has to travel: distance to base for every piece
    /// on a point, plus 24 for every piece on the bar.
    #[must_use]
    pub fn pip_count(&self, color: Color) -> u32 {
        let base = color.base();
        let on_points: u32 = self
            .occupied(color)
            .map(|point| u32::from(self.counts[point]) * (base - point as i32).unsigned_abs())
            .sum();
        on_points + NUM_POINTS as u32 * u32::from(self.bar[color])
    }

    /// First point holding a `color` piece outside its home quadrant.
    #[must_use]
    pub fn first_outside_home(&self, color: Color) -> Option<usize> {
        self.occupied(color)
            .find(|&point| !Self::in_home_quadrant(point as i32, color))
    }

    // === Game Over ===

    /// The color with every piece borne off, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.bar[color] == 0 && self.occupied(color).next().is_none())
    }

    /// Whether one color has borne off all its pieces.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    // === Geometry ===

    /// Whether `point` is one of the 24 real points.
    #[must_use]
    pub fn on_board(point: i32) -> bool {
        (0..NUM_POINTS as i32).contains(&point)
    }

    /// Whether `point` is among the six points nearest `color`'s base
    /// (the base itself counts as inside).
    #[must_use]
    pub fn in_home_quadrant(point: i32, color: Color) -> bool {
        let base = color.base();
        let edge = base + color.opponent().direction() * HOME_SIZE;
        (base.min(edge)..=base.max(edge)).contains(&point)
    }

    // === Mutation ===

    /// Add a `color` piece to a point.
    ///
    /// # Panics
    ///
    /// Panics if the opponent holds the point. Movements check this before
    /// mutating, so reaching it means a movement skipped validation.
    pub fn move_to_location(&mut self, color: Color, point: usize) {
        assert!(
            self.owners[point] != Some(color.opponent()),
            "Inconsistent board: {} pieces at point {} while moving {} there",
            color.opponent(),
            point,
            color
        );
        self.counts[point] += 1;
        self.owners[point] = Some(color);
    }

    /// Remove a `color` piece from a point.
    ///
    /// # Panics
    ///
    /// Panics if `color` does not hold the point.
    pub fn remove_from_location(&mut self, color: Color, point: usize) {
        assert!(
            self.owners[point] == Some(color),
            "Inconsistent board: no {} pieces at point {}",
            color,
            point
        );
        self.counts[point] -= 1;
        if self.counts[point] == 0 {
            self.owners[point] = None;
        }
    }

    /// Put a `color` piece on the bar.
    pub fn move_to_bar(&mut self, color: Color) {
        self.bar[color] += 1;
    }

    /// Take a `color` piece off the bar.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no pieces on the bar.
    pub fn remove_from_bar(&mut self, color: Color) {
        assert!(self.bar[color] > 0, "Inconsistent board: no {} pieces on the bar", color);
        self.bar[color] -= 1;
    }

    /// Bear a `color` piece off.
    pub fn move_off(&mut self, color: Color) {
        self.off[color] += 1;
    }

    // === Snapshots ===

    /// An independent copy for exploring a hypothetical continuation.
    #[must_use]
    pub fn scratch(&self) -> Board {
        self.clone()
    }

    /// Canonical key over all points, owners, bar and off counters.
    #[must_use]
    pub fn key(&self) -> BoardKey {
        let mut key = [0u8; KEY_LEN];
        for point in 0..NUM_POINTS {
            key[point * 2] = self.counts[point];
            key[point * 2 + 1] = match self.owners[point] {
                None => 0,
                Some(Color::White) => 1,
                Some(Color::Black) => 2,
            };
        }
        let tail = NUM_POINTS * 2;
        key[tail] = self.bar[Color::White];
        key[tail + 1] = self.bar[Color::Black];
        key[tail + 2] = self.off[Color::White];
        key[tail + 3] = self.off[Color::Black];
        BoardKey(key)
    }

    /// The same position seen from the other side: colors swapped and
    /// points reversed, so White's pieces take Black's role and vice versa.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut mirror = Board::empty();
        for point in 0..NUM_POINTS {
            if let Some(color) = self.owners[point] {
                mirror.set_point(NUM_POINTS - 1 - point, color.opponent(), self.counts[point]);
            }
        }
        for color in Color::ALL {
            mirror.bar[color.opponent()] = self.bar[color];
            mirror.off[color.opponent()] = self.off[color];
        }
        mirror
    }
}
