//! Viewport resolution, docking and content measurement.

use crate::{
    NodeId,
    core::{
        Core,
        node::{Dock, HDock, VDock},
    },
    error::{Error, Result},
    geom::{Axis, Expanse, Margins, Point, Rect},
};

/// Apply docking and the min/max clamp to a requested geometry.
pub(crate) fn dock_geometry(
    position: Point,
    size: Expanse,
    margins: Margins,
    dock: Dock,
    parent: Expanse,
    min: Expanse,
    max: Expanse,
) -> (Point, Expanse) {
    let mut position = position;
    let mut size = size;
    if dock.horizontal == HDock::Fill {
        size.w = parent.w.saturating_sub(margins.total(Axis::Horizontal));
    }
    if dock.vertical == VDock::Fill {
        size.h = parent.h.saturating_sub(margins.total(Axis::Vertical));
    }
    size = size.clamp(min, max);

    let far = |parent: u32, size: u32, total: u32| -> i32 {
        (i64::from(parent) - i64::from(size) - i64::from(total)) as i32
    };
    match dock.horizontal {
        HDock::Fill | HDock::Left => position.x = 0,
        HDock::Right => position.x = far(parent.w, size.w, margins.total(Axis::Horizontal)),
        HDock::None => {}
    }
    match dock.vertical {
        VDock::Fill | VDock::Top => position.y = 0,
        VDock::Bottom => position.y = far(parent.h, size.h, margins.total(Axis::Vertical)),
        VDock::None => {}
    }
    (position, size)
}

/// Clip one axis of a child span against its parent's span. Returns the
/// visible start, the visible length and the amount cut off the leading
/// edge.
fn clip_span(start: i64, len: u32, parent_start: i64, parent_len: u32) -> (i64, u32, u32) {
    let end = start + i64::from(len);
    let parent_end = parent_start + i64::from(parent_len);
    let visible_start = start.max(parent_start);
    let visible_end = end.min(parent_end);
    let cut = (visible_start - start).clamp(0, i64::from(len)) as u32;
    let visible = (visible_end - visible_start).max(0) as u32;
    (visible_start.min(parent_end.max(parent_start)), visible, cut)
}

impl Core {
    /// Geometry a node would take for `size` under its current dock.
    pub(crate) fn docked_geometry(&self, id: NodeId, size: Expanse) -> Result<(Point, Expanse)> {
        let node = self.node(id)?;
        let parent = match self.parent_container(id)? {
            Some(parent) => parent.size(),
            None => return Ok((Point::zero(), size)),
        };
        Ok(dock_geometry(
            node.position,
            size,
            node.margins,
            node.dock,
            parent,
            node.min_size,
            node.max_size,
        ))
    }

    /// Re-apply docking after the node's dock, margins or parent changed.
    pub(crate) fn relayout_dock(&mut self, id: NodeId) -> Result<()> {
        let node = self.node(id)?;
        let (position, size) = self.docked_geometry(id, node.size)?;
        if size != node.size {
            return self.resize(id, size);
        }
        if position != node.position {
            self.node_mut(id)?.position = position;
            self.update_bounds(id)?;
            self.notify(id, |w, ctx| w.on_position_changed(ctx))?;
            self.notify_parent(id, false)?;
        }
        Ok(())
    }

    /// Resize a node, propagating to its children and parent.
    pub(crate) fn resize(&mut self, id: NodeId, requested: Expanse) -> Result<()> {
        let (position, size) = self.docked_geometry(id, requested)?;
        let node = self.node_mut(id)?;
        if node.size == size {
            return Ok(());
        }
        let moved = node.position != position;
        node.position = position;
        node.size = size;
        node.drawn = false;
        node.sprites.fit_background(size.w, size.h);
        if node.parent.is_none() {
            node.viewport.rect = size.rect();
        }

        self.update_bounds(id)?;
        if moved {
            self.notify(id, |w, ctx| w.on_position_changed(ctx))?;
        }
        self.notify(id, |w, ctx| w.on_size_changed(ctx))?;
        for child in self.children(id)? {
            if !self.contains(child) {
                continue;
            }
            self.relayout_dock(child)?;
            if self.contains(child) {
                self.notify(child, |w, ctx| w.on_parent_size_changed(ctx))?;
            }
        }
        if self.contains(id) {
            self.notify_parent(id, true)?;
            self.update_auto_scroll(id)?;
        }
        Ok(())
    }

    /// Recompute the viewport of a node and its subtree, pre-order.
    ///
    /// A child's origin is offset from the parent's content origin and by the
    /// parent's scroll, then clipped to the parent's already clipped
    /// viewport. Amounts clipped from the leading edges are recorded so
    /// sprites can keep their content aligned.
    pub fn update_bounds(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        let node = self.node(id)?;
        let Some(parent_id) = node.parent else {
            let size = node.size;
            let node = self.node_mut(id)?;
            node.viewport.rect = size.rect();
            node.viewport.visible = node.visible;
            node.viewport.z = node.z_delta;
            return self.update_children_bounds(id);
        };
        let (pv, scroll) = {
            let parent = self.container(parent_id)?;
            let scroll = if node.options.consider_scroll {
                parent.scroll()
            } else {
                Point::zero()
            };
            (parent.viewport(), scroll)
        };

        let x = i64::from(pv.rect.tl.x) + i64::from(node.position.x) + i64::from(node.margins.left)
            - i64::from(pv.left_cut_off)
            - i64::from(scroll.x);
        let y = i64::from(pv.rect.tl.y) + i64::from(node.position.y) + i64::from(node.margins.up)
            - i64::from(pv.top_cut_off)
            - i64::from(scroll.y);

        let (vx, w, left_cut_off) = clip_span(x, node.size.w, i64::from(pv.rect.tl.x), pv.rect.w);
        let (vy, h, top_cut_off) = clip_span(y, node.size.h, i64::from(pv.rect.tl.y), pv.rect.h);
        let visible = node.visible && pv.visible;
        let z = pv.z + node.z_delta;

        let node = self.node_mut(id)?;
        node.viewport.rect = Rect::new(vx as i32, vy as i32, w, h);
        node.viewport.left_cut_off = left_cut_off;
        node.viewport.top_cut_off = top_cut_off;
        node.viewport.visible = visible;
        node.viewport.z = z;
        node.sprites.compensate(left_cut_off, top_cut_off);
        self.update_children_bounds(id)
    }

    /// Resolve every child of a node.
    fn update_children_bounds(&mut self, id: NodeId) -> Result<()> {
        for child in self.children(id)? {
            if self.contains(child) {
                self.update_bounds(child)?;
            }
        }
        Ok(())
    }

    /// Measure content and synchronise scroll offsets and scroll bars.
    ///
    /// Only runs for nodes with auto-scroll or auto-resize enabled. With
    /// auto-resize the node is sized to its content. Otherwise each enabled
    /// axis whose content overflows is clamped into range and its scroll bar
    /// is updated and shown; axes that fit hide their bar and reset the
    /// offset. An overflowing axis without a linked bar is an error.
    pub fn update_auto_scroll(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        let node = self.node(id)?;
        let flags = node.auto_scroll;
        if !flags.enabled() {
            return Ok(());
        }

        let mut extent = Expanse::default();
        for child in &node.children {
            let Some(child) = self.nodes.get(*child) else {
                continue;
            };
            if !child.visible || !child.options.scroll_participant {
                continue;
            }
            let right = i64::from(child.position.x)
                + i64::from(child.margins.total(Axis::Horizontal))
                + i64::from(child.size.w);
            let bottom = i64::from(child.position.y)
                + i64::from(child.margins.total(Axis::Vertical))
                + i64::from(child.size.h);
            extent.w = extent.w.max(right.clamp(0, i64::from(u32::MAX)) as u32);
            extent.h = extent.h.max(bottom.clamp(0, i64::from(u32::MAX)) as u32);
        }
        self.node_mut(id)?.max_child = extent;

        if flags.resize {
            self.resize(id, extent)?;
            return self.update_bounds(id);
        }

        for axis in [Axis::Horizontal, Axis::Vertical] {
            let enabled = match axis {
                Axis::Horizontal => flags.horizontal,
                Axis::Vertical => flags.vertical,
            };
            if enabled {
                self.sync_axis(id, axis)?;
            }
        }
        self.update_bounds(id)
    }

    /// Clamp one scroll axis and push its range to the linked bar.
    fn sync_axis(&mut self, id: NodeId, axis: Axis) -> Result<()> {
        let node = self.node(id)?;
        let content = node.max_child.along(axis);
        let view = node.size.along(axis);
        let bar = match axis {
            Axis::Horizontal => node.scrollbars.horizontal,
            Axis::Vertical => node.scrollbars.vertical,
        }
        .filter(|bar| self.contains(*bar));

        if content <= view {
            let node = self.node_mut(id)?;
            node.scroll = node.scroll.with(axis, 0);
            if let Some(bar) = bar {
                self.set_visible(bar, false)?;
            }
            return Ok(());
        }

        let bar = bar.ok_or(Error::MissingScrollBar { node: id, axis })?;
        let range = content - view;
        let node = self.node_mut(id)?;
        let offset = node.scroll.along(axis).clamp(0, range as i32);
        node.scroll = node.scroll.with(axis, offset);

        let value = offset as f32 / range as f32;
        let slider = view as f32 / content as f32;
        self.notify(bar, |w, _| {
            if let Some(control) = w.scroll_bar() {
                control.set_range(value, slider);
            }
            Ok(())
        })?;
        self.redraw(bar)?;
        self.set_visible(bar, true)
    }

    /// Refresh effective visibility for a subtree.
    pub(crate) fn cascade_visibility(&mut self, id: NodeId) -> Result<()> {
        let parent_visible = match self.node(id)?.parent {
            Some(parent) => self.node(parent)?.viewport.visible,
            None => true,
        };
        let node = self.node_mut(id)?;
        node.viewport.visible = node.visible && parent_visible;
        for child in self.children(id)? {
            if self.contains(child) {
                self.cascade_visibility(child)?;
            }
        }
        Ok(())
    }

    /// Refresh resolved z for a subtree.
    pub(crate) fn cascade_z(&mut self, id: NodeId) -> Result<()> {
        let parent_z = match self.node(id)?.parent {
            Some(parent) => self.node(parent)?.viewport.z,
            None => 0,
        };
        let node = self.node_mut(id)?;
        node.viewport.z = parent_z + node.z_delta;
        for child in self.children(id)? {
            if self.contains(child) {
                self.cascade_z(child)?;
            }
        }
        Ok(())
    }

    /// Tell a node's parent that the node's bounds changed. Scroll bars
    /// never notify. `structural` also invalidates the parent's layout.
    pub(crate) fn notify_parent(&mut self, child: NodeId, structural: bool) -> Result<()> {
        let node = self.node(child)?;
        if node.options.is_scrollbar {
            return Ok(());
        }
        match node.parent {
            Some(parent) => self.parent_changed(parent, child, structural),
            None => Ok(()),
        }
    }

    /// A child of `parent` moved, resized, appeared or went away.
    pub(crate) fn parent_changed(&mut self, parent: NodeId, child: NodeId, structural: bool) -> Result<()> {
        if structural {
            self.invalidate_layout(parent)?;
        }
        self.notify(parent, |w, ctx| w.on_child_bounds_changed(child, ctx))?;
        self.update_auto_scroll(parent)
    }

    /// Request a layout pass from a node's layout capability, if it has one.
    pub fn invalidate_layout(&mut self, id: impl Into<NodeId>) -> Result<()> {
        self.notify(id.into(), |w, _| {
            if let Some(layout) = w.layout() {
                layout.invalidate();
            }
            Ok(())
        })?;
        Ok(())
    }
}
