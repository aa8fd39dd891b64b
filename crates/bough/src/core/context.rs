use std::time::Instant;

use crate::{
    NodeId,
    config::Config,
    core::{Core, focus::FocusManager, timer::Timers, viewport::Viewport},
    error::Result,
    geom::{Expanse, Point},
};

/// Access handed to widget callbacks: the node the callback runs for and
/// the arena it lives in.
///
/// While a callback runs its own widget is out of the arena, so hooks that
/// the callback's mutations would deliver back to that same widget are
/// skipped.
pub trait Context {
    /// The node the callback runs for.
    fn node_id(&self) -> NodeId;

    /// The arena.
    fn core(&self) -> &Core;

    /// The arena, mutably.
    fn core_mut(&mut self) -> &mut Core;

    /// Root container node.
    fn root_id(&self) -> NodeId {
        self.core().root()
    }

    /// Unclipped size of this node.
    fn size(&self) -> Result<Expanse> {
        Ok(self.core().node(self.node_id())?.size())
    }

    /// Position of this node inside its parent.
    fn position(&self) -> Result<Point> {
        Ok(self.core().node(self.node_id())?.position())
    }

    /// Resolved viewport of this node.
    fn viewport(&self) -> Result<Viewport> {
        Ok(*self.core().node(self.node_id())?.viewport())
    }

    /// Children of this node.
    fn children(&self) -> Result<Vec<NodeId>> {
        self.core().children(self.node_id())
    }

    /// Request a redraw of this node.
    fn redraw(&mut self) -> Result<()> {
        let id = self.node_id();
        self.core_mut().redraw(id)
    }

    /// Resize this node.
    fn set_size(&mut self, size: Expanse) -> Result<()> {
        let id = self.node_id();
        self.core_mut().set_size(id, size)
    }

    /// Move this node.
    fn set_position(&mut self, position: Point) -> Result<()> {
        let id = self.node_id();
        self.core_mut().set_position(id, position)
    }

    /// Is this node selected?
    fn is_selected(&self) -> bool {
        self.core().is_selected(self.node_id())
    }

    /// Take keyboard focus.
    fn select(&mut self) -> Result<()> {
        let id = self.node_id();
        self.core_mut().set_selected(Some(id))
    }

    /// Make this node the active widget.
    fn push_active(&mut self) -> Result<()> {
        let id = self.node_id();
        self.core_mut().push_active(id)
    }

    /// Stop being the active widget.
    fn pop_active(&mut self) -> Result<()> {
        let id = self.node_id();
        self.core_mut().pop_active(id)
    }

    /// Dispose this node. Its `before_dispose` veto is not consulted, and
    /// its `on_dispose` hook runs once the current callback returns.
    fn dispose(&mut self) -> Result<bool> {
        let id = self.node_id();
        self.core_mut().dispose(id)
    }

    /// This node's timers.
    fn timers(&mut self) -> Result<&mut Timers> {
        let id = self.node_id();
        self.core_mut().timers_mut(id)
    }

    /// Active configuration.
    fn config(&self) -> &Config {
        self.core().config()
    }

    /// Frame clock.
    fn now(&self) -> Instant {
        self.core().now()
    }
}

/// The [`Context`] used for every callback the arena delivers.
pub struct CoreContext<'a> {
    /// Arena.
    core: &'a mut Core,
    /// Node the callback runs for.
    node_id: NodeId,
}

impl<'a> CoreContext<'a> {
    /// Bind a context to a node.
    pub fn new(core: &'a mut Core, node_id: NodeId) -> Self {
        Self { core, node_id }
    }
}

impl Context for CoreContext<'_> {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn core(&self) -> &Core {
        self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        self.core
    }
}
