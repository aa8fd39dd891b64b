use super::{Expanse, Point};

/// A rectangle with a signed origin and unsigned size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Does this rect have a zero size?
    pub fn is_zero(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// Exclusive right edge, widened to avoid overflow.
    pub fn right(&self) -> i64 {
        self.tl.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge, widened to avoid overflow.
    pub fn bottom(&self) -> i64 {
        self.tl.y as i64 + self.h as i64
    }

    /// Does the point fall within the rectangle? Edges are half-open, so a
    /// zero-sized rectangle contains nothing.
    pub fn contains_point(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        let (x, y) = (p.x as i64, p.y as i64);
        x >= self.tl.x as i64 && x < self.right() && y >= self.tl.y as i64 && y < self.bottom()
    }

    /// Does this rectangle completely enclose the other?
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Intersect two rectangles, returning `None` if they do not overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = (self.tl.x as i64).max(other.tl.x as i64);
        let top = (self.tl.y as i64).max(other.tl.y as i64);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::new(
            left as i32,
            top as i32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }

    /// Shift the rectangle by an offset.
    pub fn shift(&self, dx: i32, dy: i32) -> Self {
        Self {
            tl: self.tl + Point::new(dx, dy),
            w: self.w,
            h: self.h,
        }
    }
}
