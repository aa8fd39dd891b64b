//! The per-frame update walk.

use std::time::Instant;

use tracing::debug;

use crate::{
    NodeId,
    core::{Core, focus::FocusManager, timer::TimerKey},
    error::Result,
    geom::{Expanse, Point},
    widget::DrawContext,
    widgets::{
        context_menu::{ContextMenu, MenuItem},
        tooltip::Tooltip,
    },
};

impl Core {
    /// Run one frame: global shortcuts first, then every node top-down.
    ///
    /// Per node the order is: open a queued context menu, open help text
    /// whose delay elapsed, tear down hover and shortcut state if the node is
    /// no longer accessible, evaluate focus-scoped shortcuts if selected,
    /// run the widget's update hook and any pending layout pass, draw if a
    /// redraw was requested, then recurse into the surviving children.
    pub fn update(&mut self, now: Instant) -> Result<()> {
        self.ui.now = now;
        self.evaluate_global_shortcuts()?;
        let root = self.root;
        self.update_node(root)?;
        self.prune_shortcuts();
        Ok(())
    }

    /// One node's step of the update walk.
    fn update_node(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Ok(());
        }
        if let Some(items) = self.node_mut(id)?.pending_menu.take() {
            self.open_context_menu(id, items)?;
        }
        self.poll_help(id)?;

        let accessible = self.is_accessible(id);
        if !accessible {
            self.teardown_input(id)?;
        }
        if accessible && self.is_selected(id) {
            self.evaluate_selected_shortcuts(id)?;
        }
        if !self.contains(id) {
            return Ok(());
        }

        self.notify(id, |w, ctx| w.update(ctx))?;
        self.run_layout(id)?;
        self.draw(id)?;

        if !self.contains(id) {
            return Ok(());
        }
        let live: Vec<NodeId> = self
            .children(id)?
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect();
        self.node_mut(id)?.children.clone_from(&live);
        for child in live {
            if self.contains(child) {
                self.update_node(child)?;
            }
        }
        Ok(())
    }

    /// Arrange a layout container if it was invalidated.
    fn run_layout(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Ok(());
        }
        let arranged = self.notify(id, |w, ctx| {
            let Some(layout) = w.layout() else {
                return Ok(false);
            };
            if !layout.needs_update() {
                return Ok(false);
            }
            layout.arrange(ctx)?;
            layout.clear_update();
            Ok(true)
        })?;
        if arranged == Some(true) {
            debug!(?id, "layout arranged");
        }
        Ok(())
    }

    /// Regenerate sprites for a node whose redraw flag is set.
    fn draw(&mut self, id: NodeId) -> Result<()> {
        let selected = self.is_selected(id);
        let Some(node) = self.nodes.get_mut(id) else {
            return Ok(());
        };
        if node.drawn {
            return Ok(());
        }
        let Some(mut widget) = node.widget.take() else {
            return Ok(());
        };
        let mut dc = DrawContext {
            node: id,
            size: node.size,
            viewport: node.viewport,
            sprites: &mut node.sprites,
            hovered: node.mouse.inside,
            selected,
            config: &self.config,
        };
        let result = widget.draw(&mut dc);
        node.sprites.fit_background(node.size.w, node.size.h);
        node.widget = Some(widget);
        node.drawn = true;
        result
    }

    /// Drop hover, press, help and shortcut state for an inaccessible node.
    fn teardown_input(&mut self, id: NodeId) -> Result<()> {
        let node = self.node_mut(id)?;
        node.mouse.cancel();
        node.timers.cancel(&TimerKey::HelpText);
        let was_inside = std::mem::take(&mut node.mouse.inside);
        self.close_help(id)?;
        self.reset_owned_shortcuts(id);
        if was_inside {
            self.notify(id, |w, ctx| match w.hoverable() {
                Some(h) => h.on_hover_changed(false, ctx),
                None => Ok(()),
            })?;
        }
        Ok(())
    }

    /// Open a node's help tooltip once its hover delay has elapsed.
    fn poll_help(&mut self, id: NodeId) -> Result<()> {
        let now = self.ui.now;
        let node = self.node(id)?;
        let Some(text) = node.help.text.clone() else {
            return Ok(());
        };
        if node.help.popup.is_some_and(|p| self.contains(p))
            || !node.mouse.inside
            || !node.timers.exists(&TimerKey::HelpText)
            || !node.timers.elapsed(&TimerKey::HelpText, now)?
        {
            return Ok(());
        }
        self.node_mut(id)?.timers.destroy(&TimerKey::HelpText)?;
        if !self.is_accessible(id) {
            return Ok(());
        }

        let layer = self.window_layer(id)?;
        let position = self.ui.pointer + self.config.tooltip_offset();
        let z = self.config.tooltip_z;
        let root = self.root;
        let popup = self.add(root, Tooltip::new(text))?.id();
        self.set_window_layer(popup, layer)?;
        self.set_z_index(popup, z)?;
        self.set_position(popup, position)?;
        self.node_mut(id)?.help.popup = Some(popup);
        debug!(owner = ?id, ?popup, "help text opened");
        Ok(())
    }

    /// Close a node's help tooltip, if open.
    pub(crate) fn close_help(&mut self, id: NodeId) -> Result<()> {
        let Some(popup) = self.node_mut(id)?.help.popup.take() else {
            return Ok(());
        };
        if self.contains(popup) {
            debug!(owner = ?id, ?popup, "help text closed");
            self.dispose(popup)?;
        }
        Ok(())
    }

    /// Open a context menu for `owner` at the pointer, one layer above the
    /// active layer. An empty item list is a no-op.
    pub(crate) fn open_context_menu(&mut self, owner: NodeId, items: Vec<MenuItem>) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        let layer = self.active_layer() + 1;
        let width = self.config.menu_width;
        let height = self.config.menu_item_height * items.len() as u32;
        let z = self.config.tooltip_z - 1;
        let count = items.len();
        let root = self.root;
        let size = Expanse::new(width, height);
        let position = fit_inside(self.ui.pointer, size, self.node(root)?.size());

        let menu = self.add(root, ContextMenu::new(owner, items))?.id();
        self.set_window_layer(menu, layer)?;
        self.set_z_index(menu, z)?;
        self.set_size(menu, size)?;
        self.set_position(menu, position)?;
        self.push_active(menu)?;
        debug!(?owner, ?menu, layer, items = count, "context menu opened");
        Ok(())
    }
}

/// Shift a popup so it stays inside the window where possible.
fn fit_inside(position: Point, size: Expanse, window: Expanse) -> Point {
    let clamp = |p: i32, len: u32, max: u32| -> i32 {
        let limit = i64::from(max) - i64::from(len);
        i64::from(p).min(limit).max(0) as i32
    };
    Point::new(clamp(position.x, size.w, window.w), clamp(position.y, size.h, window.h))
}
