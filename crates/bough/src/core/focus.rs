use tracing::debug;

use crate::{
    NodeId,
    core::world::Core,
    error::{Error, Result},
};

/// Trait for managing keyboard focus ("selection").
pub trait FocusManager {
    /// The node holding keyboard focus.
    fn selected(&self) -> Option<NodeId>;

    /// Does the node hold keyboard focus?
    fn is_selected(&self, node: NodeId) -> bool;

    /// Move keyboard focus. `None` clears it.
    ///
    /// The previous holder is deselected first. If its `on_deselected` hook
    /// moves focus itself, that choice stands and `target` is dropped.
    fn set_selected(&mut self, target: Option<NodeId>) -> Result<()>;

    /// Counter bumped on every focus change.
    fn focus_generation(&self) -> u64;
}

impl FocusManager for Core {
    fn selected(&self) -> Option<NodeId> {
        self.ui.selected
    }

    fn is_selected(&self, node: NodeId) -> bool {
        self.ui.selected == Some(node)
    }

    fn set_selected(&mut self, target: Option<NodeId>) -> Result<()> {
        if let Some(target) = target {
            self.node(target)?;
            if target == self.root {
                return Err(Error::RootUnsupported("set_selected"));
            }
        }
        if self.ui.selected == target {
            return Ok(());
        }

        let previous = self.ui.selected.take();
        self.ui.focus_gen += 1;
        let generation = self.ui.focus_gen;
        if let Some(previous) = previous
            && self.contains(previous)
        {
            self.redraw(previous)?;
            self.notify(previous, |w, ctx| w.on_deselected(ctx))?;
            if self.ui.focus_gen != generation {
                debug!(?previous, selected = ?self.ui.selected, "focus reassigned during deselect");
                return Ok(());
            }
        }

        let Some(target) = target.filter(|t| self.contains(*t)) else {
            debug!(?previous, "focus cleared");
            return Ok(());
        };
        self.ui.selected = Some(target);
        self.redraw(target)?;
        debug!(?previous, ?target, "focus moved");
        self.notify(target, |w, ctx| w.on_selected(ctx))?;
        Ok(())
    }

    fn focus_generation(&self) -> u64 {
        self.ui.focus_gen
    }
}
