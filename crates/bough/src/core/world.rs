use std::{
    any::{Any, type_name},
    collections::BTreeSet,
    time::Instant,
};

use slotmap::SlotMap;
use tracing::debug;

use crate::{
    Context, NodeId, ShortcutId, TypedId,
    config::Config,
    core::{
        context::CoreContext,
        focus::FocusManager,
        node::{AutoScroll, Dock, Node},
        shortcut::Shortcut,
        timer::Timers,
    },
    error::{Error, Result},
    event::key::{KeyCode, Mods},
    geom::{Axis, Expanse, Margins, Point},
    name::NodeName,
    widget::Widget,
    widgets::context_menu::MenuItem,
};

/// Widget installed at the root of every arena.
pub(crate) struct Root;

impl Widget for Root {
    fn name(&self) -> NodeName {
        NodeName::convert("root")
    }
}

/// An entry on the active-widget stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActiveEntry {
    /// The node that became active.
    pub(crate) node: NodeId,
    /// Selection to restore when the entry is popped.
    pub(crate) restore: Option<NodeId>,
}

/// Window-level state threaded through input dispatch and update passes:
/// keyboard focus, the modal stack and the current input snapshot.
///
/// Created with the [`Core`] and torn down by [`Ui::shutdown`](crate::Ui::shutdown).
#[derive(Debug)]
pub struct UiContext {
    /// Node holding keyboard focus.
    pub(crate) selected: Option<NodeId>,
    /// Bumped on every focus change; used to detect re-entrant changes.
    pub(crate) focus_gen: u64,
    /// Former and current active widgets, topmost last.
    pub(crate) active: Vec<ActiveEntry>,
    /// Keys currently held.
    pub(crate) keys: BTreeSet<KeyCode>,
    /// Modifiers currently held.
    pub(crate) mods: Mods,
    /// Last pointer position seen.
    pub(crate) pointer: Point,
    /// Frame clock.
    pub(crate) now: Instant,
    /// Selectable node hit by the current left press, applied when dispatch
    /// finishes.
    pub(crate) pending_selection: Option<NodeId>,
}

impl UiContext {
    /// Fresh state with the clock at `now`.
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            selected: None,
            focus_gen: 0,
            active: Vec::new(),
            keys: BTreeSet::new(),
            mods: Mods::default(),
            pointer: Point::zero(),
            now,
            pending_selection: None,
        }
    }

    /// Keys currently held.
    pub fn keys(&self) -> &BTreeSet<KeyCode> {
        &self.keys
    }

    /// Modifiers currently held.
    pub fn mods(&self) -> Mods {
        self.mods
    }

    /// Last pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Frame clock.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Depth of the active-widget stack.
    pub fn active_depth(&self) -> usize {
        self.active.len()
    }
}

/// The node arena and everything that hangs off it.
pub struct Core {
    /// Node storage.
    pub(crate) nodes: SlotMap<NodeId, Node>,
    /// Root container node.
    pub(crate) root: NodeId,
    /// Focus, modal stack and input snapshot.
    pub(crate) ui: UiContext,
    /// Registered shortcuts.
    pub(crate) shortcuts: SlotMap<ShortcutId, Shortcut>,
    /// Timing and popup configuration.
    pub(crate) config: Config,
    /// Disposed nodes whose rendering resources the collaborator has not
    /// released yet.
    pub(crate) released: Vec<NodeId>,
}

impl Default for Core {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Core {
    /// Create a new Core with an empty root container.
    pub fn new(config: Config) -> Self {
        let mut nodes = SlotMap::with_key();
        let mut root = Node::new(Box::new(Root), type_name::<Root>());
        root.viewport.visible = true;
        let root = nodes.insert(root);
        Self {
            nodes,
            root,
            ui: UiContext::new(Instant::now()),
            shortcuts: SlotMap::with_key(),
            config,
            released: Vec::new(),
        }
    }

    /// The root container node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Window-level state.
    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Frame clock.
    pub fn now(&self) -> Instant {
        self.ui.now
    }

    /// Does the handle refer to a live node?
    pub fn contains(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(id.into())
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Borrow a node.
    pub fn node(&self, id: impl Into<NodeId>) -> Result<&Node> {
        let id = id.into();
        self.nodes.get(id).ok_or(Error::Disposed(id))
    }

    /// Mutably borrow a node.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::Disposed(id))
    }

    /// Parent of a node.
    pub fn parent(&self, id: impl Into<NodeId>) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Snapshot of a node's children.
    pub fn children(&self, id: impl Into<NodeId>) -> Result<Vec<NodeId>> {
        Ok(self.node(id)?.children.clone())
    }

    /// Every live node in tree pre-order starting at `id`.
    pub fn preorder(&self, id: impl Into<NodeId>) -> Result<Vec<NodeId>> {
        let id = id.into();
        self.node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.get(next) {
                out.push(next);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        Ok(out)
    }

    /// Fail with `RootUnsupported` if `id` is the root.
    pub(crate) fn not_root(&self, id: NodeId, op: &'static str) -> Result<()> {
        if id == self.root {
            Err(Error::RootUnsupported(op))
        } else {
            Ok(())
        }
    }

    /// Take a node's widget out of its slot for the duration of `f`.
    ///
    /// The widget is restored afterwards. If `f` disposed the node, the
    /// widget's `on_dispose` hook runs instead.
    pub(crate) fn with_widget_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut Self) -> R,
    ) -> Result<R> {
        let mut widget = self
            .node_mut(id)?
            .widget
            .take()
            .ok_or(Error::ReentrantWidgetBorrow(id))?;
        let out = f(widget.as_mut(), self);
        match self.nodes.get_mut(id) {
            Some(node) => node.widget = Some(widget),
            None => {
                debug!(?id, "node disposed from its own callback");
                widget.on_dispose(&mut CoreContext::new(self, id));
            }
        }
        Ok(out)
    }

    /// Run a widget callback with a context bound to the node.
    pub(crate) fn call<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut dyn Context) -> Result<R>,
    ) -> Result<R> {
        self.with_widget_mut(id, |widget, core| {
            let mut ctx = CoreContext::new(core, id);
            f(widget, &mut ctx)
        })?
    }

    /// Deliver a notification hook. A widget whose own callback caused the
    /// notification is still out of its slot and is skipped.
    pub(crate) fn notify<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut dyn Context) -> Result<R>,
    ) -> Result<Option<R>> {
        if self.node(id)?.widget.is_none() {
            return Ok(None);
        }
        self.call(id, f).map(Some)
    }

    /// Execute a closure with mutable access to a widget of type `W`.
    pub fn with_widget<W, R>(
        &mut self,
        id: impl Into<NodeId>,
        f: impl FnOnce(&mut W, &mut dyn Context) -> Result<R>,
    ) -> Result<R>
    where
        W: Widget + 'static,
    {
        let id = id.into();
        self.call(id, |widget, ctx| {
            let any = widget as &mut dyn Any;
            let widget = any.downcast_mut::<W>().ok_or(Error::WidgetType(id))?;
            f(widget, ctx)
        })
    }

    /// Borrow a widget of type `W`.
    pub fn widget<W>(&self, id: impl Into<NodeId>) -> Result<&W>
    where
        W: Widget + 'static,
    {
        let id = id.into();
        let widget = self
            .node(id)?
            .widget
            .as_deref()
            .ok_or(Error::ReentrantWidgetBorrow(id))?;
        (widget as &dyn Any)
            .downcast_ref::<W>()
            .ok_or(Error::WidgetType(id))
    }

    /// Create a node for `widget` under `parent`.
    pub fn add<W>(&mut self, parent: impl Into<NodeId>, widget: W) -> Result<TypedId<W>>
    where
        W: Widget + 'static,
    {
        let id = self.insert(parent.into(), Box::new(widget), type_name::<W>())?;
        Ok(TypedId::new(id))
    }

    /// Create a node for an already boxed widget under `parent`.
    pub fn add_boxed(&mut self, parent: impl Into<NodeId>, widget: Box<dyn Widget>) -> Result<NodeId> {
        self.insert(parent.into(), widget, "dyn Widget")
    }

    /// Attach a new node and run its mount hook.
    fn insert(
        &mut self,
        parent: NodeId,
        widget: Box<dyn Widget>,
        widget_type: &'static str,
    ) -> Result<NodeId> {
        self.node(parent)?;
        let mut node = Node::new(widget, widget_type);
        node.parent = Some(parent);
        let name = node.name.clone();
        let id = self.nodes.insert(node);
        self.node_mut(parent)?.children.push(id);
        debug!(?id, ?parent, %name, "node added");

        self.relayout_dock(id)?;
        self.update_bounds(id)?;
        self.notify(id, |w, ctx| w.on_mount(ctx))?;
        self.notify_parent(id, true)?;
        Ok(id)
    }

    /// Move a node under a new parent.
    pub fn set_parent(&mut self, child: impl Into<NodeId>, parent: impl Into<NodeId>) -> Result<()> {
        let child = child.into();
        let parent = parent.into();
        self.not_root(child, "set_parent")?;
        self.node(parent)?;
        let old = self.node(child)?.parent;
        if old == Some(parent) {
            return Ok(());
        }

        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(Error::WouldCreateCycle { parent, child });
            }
            cursor = self.node(id)?.parent;
        }

        if let Some(old) = old {
            self.detach(old, child)?;
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        debug!(?child, ?old, ?parent, "node re-parented");

        self.relayout_dock(child)?;
        self.update_bounds(child)?;
        let is_scrollbar = self.node(child)?.options.is_scrollbar;
        if let Some(old) = old
            && !is_scrollbar
        {
            self.parent_changed(old, child, true)?;
        }
        self.notify_parent(child, true)
    }

    /// Remove `child` from `parent`'s child list.
    fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let node = self.node_mut(parent)?;
        let index = node
            .children
            .iter()
            .position(|c| *c == child)
            .ok_or(Error::DetachFailed { parent, child })?;
        node.children.remove(index);
        Ok(())
    }

    /// Dispose a direct child of `parent`.
    pub fn remove_child(&mut self, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Result<bool> {
        let parent = parent.into();
        let child = child.into();
        if self.node(child)?.parent != Some(parent) {
            return Err(Error::Invalid(format!("{child:?} is not a child of {parent:?}")));
        }
        self.dispose(child)
    }

    /// Dispose a node and its subtree.
    ///
    /// The node's `before_dispose` hook may veto, in which case nothing
    /// changes and `Ok(false)` is returned. Descendants are disposed without
    /// consulting their hooks.
    pub fn dispose(&mut self, id: impl Into<NodeId>) -> Result<bool> {
        let id = id.into();
        self.not_root(id, "dispose")?;
        let confirmed = self
            .notify(id, |w, ctx| Ok(w.before_dispose(ctx)))?
            .unwrap_or(true);
        if !confirmed {
            debug!(?id, "dispose vetoed");
            return Ok(false);
        }
        let parent = self.node(id)?.parent;
        let is_scrollbar = self.node(id)?.options.is_scrollbar;
        self.dispose_tree(id)?;
        if let Some(parent) = parent
            && !is_scrollbar
            && self.contains(parent)
        {
            self.parent_changed(parent, id, true)?;
        }
        Ok(true)
    }

    /// Tear down a subtree bottom-up.
    pub(crate) fn dispose_tree(&mut self, id: NodeId) -> Result<()> {
        self.notify(id, |w, ctx| {
            w.on_dispose(ctx);
            Ok(())
        })?;

        for shortcut in self.shortcuts.values_mut() {
            if shortcut.owner == id {
                shortcut.removed = true;
            }
        }
        self.released.push(id);

        if let Some(popup) = self.node_mut(id)?.help.popup.take()
            && self.contains(popup)
        {
            self.dispose_tree(popup)?;
        }

        for child in self.children(id)? {
            if self.contains(child) {
                self.dispose_tree(child)?;
            }
        }

        let node = self.node(id)?;
        let (parent, is_scrollbar) = (node.parent, node.options.is_scrollbar);
        if let Some(parent) = parent
            && self.contains(parent)
        {
            self.detach(parent, id)?;
        }
        self.nodes.remove(id);
        debug!(?id, "node disposed");

        if is_scrollbar {
            for node in self.nodes.values_mut() {
                if node.scrollbars.horizontal == Some(id) {
                    node.scrollbars.horizontal = None;
                }
                if node.scrollbars.vertical == Some(id) {
                    node.scrollbars.vertical = None;
                }
            }
        }
        if self.ui.selected == Some(id) {
            self.ui.selected = None;
            self.ui.focus_gen += 1;
        }
        if self.ui.pending_selection == Some(id) {
            self.ui.pending_selection = None;
        }
        self.remove_active(id)
    }

    /// Move a node relative to its parent's content origin.
    pub fn set_position(&mut self, id: impl Into<NodeId>, position: Point) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_position")?;
        let node = self.node_mut(id)?;
        let old = node.position;
        if old == position {
            return Ok(());
        }
        node.position = position;
        let (docked, _) = self.docked_geometry(id, self.node(id)?.size)?;
        self.node_mut(id)?.position = docked;
        if docked == old {
            return Ok(());
        }
        self.update_bounds(id)?;
        self.notify(id, |w, ctx| w.on_position_changed(ctx))?;
        self.notify_parent(id, false)
    }

    /// Resize a node. The size is clamped to the node's limits and dock.
    pub fn set_size(&mut self, id: impl Into<NodeId>, size: Expanse) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_size")?;
        self.resize(id, size)
    }

    /// Set the minimum size clamp and re-apply it.
    pub fn set_min_size(&mut self, id: impl Into<NodeId>, min: Expanse) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_min_size")?;
        let node = self.node_mut(id)?;
        node.min_size = min;
        let size = node.size;
        self.resize(id, size)
    }

    /// Set the maximum size clamp and re-apply it.
    pub fn set_max_size(&mut self, id: impl Into<NodeId>, max: Expanse) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_max_size")?;
        let node = self.node_mut(id)?;
        node.max_size = max;
        let size = node.size;
        self.resize(id, size)
    }

    /// Replace a node's margins.
    pub fn set_margins(&mut self, id: impl Into<NodeId>, margins: Margins) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_margins")?;
        let node = self.node_mut(id)?;
        if node.margins == margins {
            return Ok(());
        }
        node.margins = margins;
        self.relayout_dock(id)?;
        self.update_bounds(id)?;
        self.notify_parent(id, true)
    }

    /// Replace a node's docking constraints.
    pub fn set_dock(&mut self, id: impl Into<NodeId>, dock: Dock) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_dock")?;
        let node = self.node_mut(id)?;
        if node.dock == dock {
            return Ok(());
        }
        node.dock = dock;
        self.relayout_dock(id)
    }

    /// Show or hide a node. Descendants that are themselves hidden stay
    /// hidden when an ancestor is shown.
    pub fn set_visible(&mut self, id: impl Into<NodeId>, visible: bool) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_visible")?;
        let node = self.node_mut(id)?;
        if node.visible == visible {
            return Ok(());
        }
        node.visible = visible;
        node.drawn = false;
        self.cascade_visibility(id)?;
        self.notify_parent(id, true)
    }

    /// Is a node visible once every ancestor is taken into account?
    pub fn effective_visible(&self, id: impl Into<NodeId>) -> Result<bool> {
        let mut cursor = Some(id.into());
        while let Some(id) = cursor {
            let node = self.node(id)?;
            if !node.visible {
                return Ok(false);
            }
            cursor = node.parent;
        }
        Ok(true)
    }

    /// Set a node's z delta relative to its parent.
    pub fn set_z_index(&mut self, id: impl Into<NodeId>, z_delta: i32) -> Result<()> {
        let id = id.into();
        let node = self.node_mut(id)?;
        if node.z_delta == z_delta {
            return Ok(());
        }
        node.z_delta = z_delta;
        self.cascade_z(id)
    }

    /// Resolved z order: the sum of deltas along the ancestor chain.
    pub fn z_index(&self, id: impl Into<NodeId>) -> Result<i32> {
        let mut cursor = Some(id.into());
        let mut z = 0;
        while let Some(id) = cursor {
            let node = self.node(id)?;
            z += node.z_delta;
            cursor = node.parent;
        }
        Ok(z)
    }

    /// Set a node's own window layer.
    pub fn set_window_layer(&mut self, id: impl Into<NodeId>, layer: i32) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_window_layer")?;
        self.node_mut(id)?.window_layer = layer;
        Ok(())
    }

    /// Effective window layer: the max of the node's own layer and its
    /// parent's. The root is always layer 0.
    pub fn window_layer(&self, id: impl Into<NodeId>) -> Result<i32> {
        let mut cursor = Some(id.into());
        let mut layer = 0;
        while let Some(id) = cursor {
            let node = self.node(id)?;
            if id != self.root {
                layer = layer.max(node.window_layer);
            }
            cursor = node.parent;
        }
        Ok(layer)
    }

    /// Set the scroll offset. Offsets are clamped to the content when
    /// auto-scroll is on.
    pub fn set_scroll(&mut self, id: impl Into<NodeId>, scroll: Point) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_scroll")?;
        let node = self.node_mut(id)?;
        let scroll = Point::new(scroll.x.max(0), scroll.y.max(0));
        if node.scroll == scroll {
            return Ok(());
        }
        node.scroll = scroll;
        if node.auto_scroll.enabled() {
            self.update_auto_scroll(id)
        } else {
            self.update_bounds(id)
        }
    }

    /// Scroll to a fraction of the scrollable range on one axis.
    pub fn set_scroll_fraction(&mut self, id: impl Into<NodeId>, axis: Axis, fraction: f32) -> Result<()> {
        let id = id.into();
        let node = self.node(id)?;
        let range = node
            .max_child
            .along(axis)
            .saturating_sub(node.size.along(axis));
        let offset = (fraction.clamp(0.0, 1.0) * range as f32).round() as i32;
        let scroll = node.scroll.with(axis, offset);
        self.set_scroll(id, scroll)
    }

    /// Replace a node's auto-scroll flags and measure immediately.
    pub fn set_auto_scroll(&mut self, id: impl Into<NodeId>, auto_scroll: AutoScroll) -> Result<()> {
        let id = id.into();
        self.not_root(id, "set_auto_scroll")?;
        self.node_mut(id)?.auto_scroll = auto_scroll;
        self.update_auto_scroll(id)
    }

    /// Link a scroll bar node to a node's axis.
    pub fn link_scrollbar(&mut self, id: impl Into<NodeId>, axis: Axis, bar: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        let bar = bar.into();
        self.not_root(id, "link_scrollbar")?;
        self.node(bar)?;
        let node = self.node_mut(id)?;
        match axis {
            Axis::Horizontal => node.scrollbars.horizontal = Some(bar),
            Axis::Vertical => node.scrollbars.vertical = Some(bar),
        }
        self.update_auto_scroll(id)
    }

    /// Request regeneration of a node's sprites on the next update. Any
    /// number of requests before the update cost one draw.
    pub fn redraw(&mut self, id: impl Into<NodeId>) -> Result<()> {
        self.node_mut(id.into())?.drawn = false;
        Ok(())
    }

    /// Set or clear a node's hover help text.
    pub fn set_help_text(&mut self, id: impl Into<NodeId>, text: Option<String>) -> Result<()> {
        let id = id.into();
        let node = self.node_mut(id)?;
        node.help.text = text;
        if node.help.text.is_none() {
            self.close_help(id)?;
        }
        Ok(())
    }

    /// Queue a context menu for `owner`, opened at the pointer on the next
    /// update. An empty item list opens nothing.
    pub fn queue_context_menu(&mut self, owner: impl Into<NodeId>, items: Vec<MenuItem>) -> Result<()> {
        self.node_mut(owner.into())?.pending_menu = Some(items);
        Ok(())
    }

    /// Mutable access to a node's timers.
    pub fn timers_mut(&mut self, id: impl Into<NodeId>) -> Result<&mut Timers> {
        Ok(&mut self.node_mut(id.into())?.timers)
    }

    /// Push a node onto the active-widget stack, raising the active layer to
    /// its window layer.
    pub fn push_active(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        self.node(id)?;
        self.ui.active.push(ActiveEntry {
            node: id,
            restore: self.ui.selected,
        });
        debug!(?id, depth = self.ui.active.len(), "active widget pushed");
        Ok(())
    }

    /// Pop a node off the active-widget stack. If it was on top, the
    /// selection recorded when it was pushed is restored.
    pub fn pop_active(&mut self, id: impl Into<NodeId>) -> Result<()> {
        self.remove_active(id.into())
    }

    /// Drop every stack entry for `id`.
    fn remove_active(&mut self, id: NodeId) -> Result<()> {
        let Some(index) = self.ui.active.iter().rposition(|e| e.node == id) else {
            return Ok(());
        };
        let was_top = index + 1 == self.ui.active.len();
        let entry = self.ui.active.remove(index);
        self.ui.active.retain(|e| e.node != id);
        debug!(?id, depth = self.ui.active.len(), "active widget popped");
        if was_top
            && let Some(restore) = entry.restore
            && self.contains(restore)
        {
            // Restoring counts as a focus change even if the selection is
            // already `restore`.
            self.ui.focus_gen += 1;
            self.set_selected(Some(restore))?;
        }
        Ok(())
    }

    /// The topmost active widget.
    pub fn active(&self) -> Option<NodeId> {
        self.ui.active.last().map(|e| e.node)
    }

    /// The window layer of the topmost active widget, or 0.
    pub fn active_layer(&self) -> i32 {
        self.ui
            .active
            .iter()
            .rev()
            .find_map(|e| self.window_layer(e.node).ok())
            .unwrap_or(0)
    }

    /// May this node receive input? The root always may. Other nodes must be
    /// alive and visible, and sit at or above the active layer unless they
    /// opt into always receiving mouse input.
    pub fn is_accessible(&self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        if id == self.root {
            return true;
        }
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if !node.viewport.visible {
            return false;
        }
        node.options.always_active_mouse
            || self
                .window_layer(id)
                .is_ok_and(|layer| layer >= self.active_layer())
    }

    /// Window size changed: resize the root and re-dock its children.
    pub(crate) fn resize_root(&mut self, size: Expanse) -> Result<()> {
        let root = self.root;
        self.resize(root, size)
    }
}
