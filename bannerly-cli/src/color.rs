//! Terminal colors and accessibility advice for banner output.

use clap::ValueEnum;

/// Resets all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Supported terminal text colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Black,
}

impl Color {
    /// The ANSI SGR sequence selecting this foreground color.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    /// Colorblind-accessibility advice for colors that are hard to
    /// distinguish, to be surfaced on stderr before the banner.
    #[must_use]
    pub const fn accessibility_advice(self) -> Option<&'static str> {
        match self {
            Self::Red => Some(
                "Warning: Red may be difficult for colorblind users. \
                 Consider cyan, yellow, or white for better accessibility.",
            ),
            Self::Green => Some(
                "Warning: Green may be difficult for colorblind users. \
                 Consider cyan, yellow, or white for better accessibility.",
            ),
            _ => None,
        }
    }
}
