use super::Axis;

/// Space reserved around a node inside its parent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Margins {
    /// Left margin.
    pub left: u32,
    /// Top margin.
    pub up: u32,
    /// Right margin.
    pub right: u32,
    /// Bottom margin.
    pub down: u32,
}

impl Margins {
    /// Construct margins from the four edges.
    pub fn new(left: u32, up: u32, right: u32, down: u32) -> Self {
        Self {
            left,
            up,
            right,
            down,
        }
    }

    /// The same margin on every edge.
    pub fn uniform(m: u32) -> Self {
        Self::new(m, m, m, m)
    }

    /// Leading margin along an axis (left or up).
    pub fn leading(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.up,
        }
    }

    /// Trailing margin along an axis (right or down).
    pub fn trailing(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.down,
        }
    }

    /// Sum of both margins along an axis.
    pub fn total(&self, axis: Axis) -> u32 {
        self.leading(axis).saturating_add(self.trailing(axis))
    }
}
