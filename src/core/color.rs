//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The four fixed seats of the board. Turn order is the declaration order:
//! red, green, yellow, blue.
//!
//! ## ColorMap
//!
//! Efficient per-color data storage backed by a fixed array for O(1) access.
//! Indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of colors (and players) in a game.
pub const COLOR_COUNT: usize = 4;

/// One of the four player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; COLOR_COUNT] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Position of this color in turn order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
        }
    }

    /// Color at a turn-order index, wrapping past the last seat.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % COLOR_COUNT]
    }

    /// Global ring index where this color's relative position 0 lands.
    ///
    /// ```
    /// use ludo_engine::core::Color;
    ///
    /// assert_eq!(Color::Red.entry_offset(), 1);
    /// assert_eq!(Color::Blue.entry_offset(), 40);
    /// ```
    #[must_use]
    pub const fn entry_offset(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 14,
            Color::Yellow => 27,
            Color::Blue => 40,
        }
    }

    /// Lowercase name, as used in piece ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }

    /// Parse a lowercase color name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Iterate over all colors in turn order.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, ColorMap};
///
/// let mut finished: ColorMap<u8> = ColorMap::default();
/// finished[Color::Green] = 2;
/// assert_eq!(finished[Color::Green], 2);
/// assert_eq!(finished[Color::Red], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; COLOR_COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
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
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
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
