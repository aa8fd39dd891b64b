use crate::{
    Context,
    error::Result,
    geom::{Axis, Expanse},
    widget::{Layout, Widget},
};

/// Lays its visible children out one after another along an axis and sizes
/// itself to fit them.
///
/// Each child is placed at the running offset and its margins pad it on
/// both sides; hidden children and scroll bars take no space. With a uniform cross size every child is stretched to it.
#[derive(Debug, Clone)]
pub struct Stack {
    /// Stacking direction.
    axis: Axis,
    /// Cross-axis size forced onto every child.
    uniform: Option<u32>,
    /// A layout pass is pending.
    dirty: bool,
}

impl Stack {
    /// A stack along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            uniform: None,
            dirty: true,
        }
    }

    /// Top to bottom.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Left to right.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Stretch every child to `size` across the stacking axis.
    pub fn with_uniform(mut self, size: u32) -> Self {
        self.uniform = Some(size);
        self
    }

    /// Change the uniform cross size.
    pub fn set_uniform(&mut self, size: Option<u32>) {
        if self.uniform != size {
            self.uniform = size;
            self.dirty = true;
        }
    }

    /// Stacking direction.
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

fn cross(axis: Axis) -> Axis {
    match axis {
        Axis::Horizontal => Axis::Vertical,
        Axis::Vertical => Axis::Horizontal,
    }
}

impl Layout for Stack {
    fn needs_update(&self) -> bool {
        self.dirty
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }

    fn clear_update(&mut self) {
        self.dirty = false;
    }

    fn arrange(&mut self, ctx: &mut dyn Context) -> Result<()> {
        let axis = self.axis;
        let across = cross(axis);
        let mut offset: u32 = 0;
        let mut extent: u32 = 0;

        for child in ctx.children()? {
            let node = ctx.core().node(child)?;
            if !node.is_visible() || node.options().is_scrollbar {
                continue;
            }
            let margins = node.margins();
            let position = node.position();
            let size = node.size();

            ctx.core_mut()
                .set_position(child, position.with(axis, offset as i32))?;
            if let Some(uniform) = self.uniform {
                ctx.core_mut().set_size(child, size.with(across, uniform))?;
            }

            let size = ctx.core().node(child)?.size();
            offset += margins.total(axis) + size.along(axis);
            extent = extent.max(size.along(across) + margins.total(across));
        }

        let extent = self.uniform.map_or(extent, |u| extent.max(u));
        let size = Expanse::default().with(axis, offset).with(across, extent);
        ctx.set_size(size)
    }
}

impl Widget for Stack {
    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(self)
    }
}
