use std::ops::{Add, Sub};

/// A point with signed coordinates. Positions relative to a parent can be
/// negative, and screen-space origins go negative once content scrolls.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Construct a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Is this the origin?
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Component along an axis.
    pub fn along(&self, axis: crate::Axis) -> i32 {
        match axis {
            crate::Axis::Horizontal => self.x,
            crate::Axis::Vertical => self.y,
        }
    }

    /// Return a copy with the component along `axis` replaced.
    pub fn with(&self, axis: crate::Axis, v: i32) -> Self {
        match axis {
            crate::Axis::Horizontal => Self { x: v, y: self.y },
            crate::Axis::Vertical => Self { x: self.x, y: v },
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from(v: (i32, i32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}
