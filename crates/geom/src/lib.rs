//! Geometry primitives used across bough.

/// Width/height size type.
mod expanse;
/// Margin helpers.
mod margins;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use margins::Margins;
pub use point::Point;
pub use rect::Rect;

/// A layout axis.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}
