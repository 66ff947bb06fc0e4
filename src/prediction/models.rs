use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Size {
    Big,
    Small,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Big, Size::Small];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Big => "Big",
            Size::Small => "Small",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Red,
    Green,
    Violet,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Violet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Violet => "Violet",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Color::Red => "🔴",
            Color::Green => "🟢",
            Color::Violet => "🟣",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One memoized outcome for a (user, round) key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub size: Size,
    pub color: Color,
}

impl Prediction {
    /// Uniform, independent draw of size and color
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: Size::ALL[rng.gen_range(0..Size::ALL.len())],
            color: Color::ALL[rng.gen_range(0..Color::ALL.len())],
        }
    }
}
