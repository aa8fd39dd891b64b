use super::{Axis, Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// Node sizes and size clamps are expressed as expanses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The largest representable expanse, used as an "unbounded" maximum.
    pub fn max_value() -> Self {
        Self {
            w: i32::MAX as u32,
            h: i32::MAX as u32,
        }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this Size can completely enclose the target size in both dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// Clamp each dimension into `[min, max]`. When `min` exceeds `max`, `min` wins.
    pub fn clamp(&self, min: Self, max: Self) -> Self {
        Self {
            w: self.w.min(max.w).max(min.w),
            h: self.h.min(max.h).max(min.h),
        }
    }

    /// Dimension along an axis.
    pub fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// Return a copy with the dimension along `axis` replaced.
    pub fn with(&self, axis: Axis, v: u32) -> Self {
        match axis {
            Axis::Horizontal => Self { w: v, h: self.h },
            Axis::Vertical => Self { w: self.w, h: v },
        }
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp() {
        let min = Expanse::new(10, 10);
        let max = Expanse::new(100, 100);
        assert_eq!(Expanse::new(5, 200).clamp(min, max), Expanse::new(10, 100));
        assert_eq!(Expanse::new(50, 50).clamp(min, max), Expanse::new(50, 50));
        assert_eq!(
            Expanse::new(5, 5).clamp(Expanse::new(20, 20), Expanse::new(10, 10)),
            Expanse::new(20, 20)
        );
    }
}
