//! The uniform parent surface shared by the root container and nested
//! widgets.

use crate::{
    NodeId,
    core::{Core, viewport::Viewport},
    error::Result,
    geom::{Expanse, Point},
};

/// What a child can ask of whatever contains it.
pub trait Container {
    /// The container's node.
    fn id(&self) -> NodeId;

    /// Is this the root container?
    fn is_root(&self) -> bool;

    /// Resolved viewport children are clipped against.
    fn viewport(&self) -> Viewport;

    /// Size children dock against.
    fn size(&self) -> Expanse;

    /// Scroll offset applied to children.
    fn scroll(&self) -> Point;

    /// Effective window layer.
    fn window_layer(&self) -> i32;

    /// Resolved z order.
    fn z_index(&self) -> i32;

    /// May the container receive input?
    fn is_accessible(&self) -> bool;

    /// Current children.
    fn children(&self) -> &[NodeId];
}

/// The root container: unscrolled, layer 0 and always accessible.
pub struct RootContainer<'a> {
    /// Arena the root lives in.
    core: &'a Core,
}

impl Container for RootContainer<'_> {
    fn id(&self) -> NodeId {
        self.core.root
    }

    fn is_root(&self) -> bool {
        true
    }

    fn viewport(&self) -> Viewport {
        self.core.nodes[self.core.root].viewport
    }

    fn size(&self) -> Expanse {
        self.core.nodes[self.core.root].size
    }

    fn scroll(&self) -> Point {
        Point::zero()
    }

    fn window_layer(&self) -> i32 {
        0
    }

    fn z_index(&self) -> i32 {
        0
    }

    fn is_accessible(&self) -> bool {
        true
    }

    fn children(&self) -> &[NodeId] {
        &self.core.nodes[self.core.root].children
    }
}

/// A widget acting as a parent.
pub struct WidgetContainer<'a> {
    /// Arena the widget lives in.
    core: &'a Core,
    /// Widget node.
    id: NodeId,
}

impl Container for WidgetContainer<'_> {
    fn id(&self) -> NodeId {
        self.id
    }

    fn is_root(&self) -> bool {
        false
    }

    fn viewport(&self) -> Viewport {
        self.core.nodes[self.id].viewport
    }

    fn size(&self) -> Expanse {
        self.core.nodes[self.id].size
    }

    fn scroll(&self) -> Point {
        self.core.nodes[self.id].scroll
    }

    fn window_layer(&self) -> i32 {
        self.core.window_layer(self.id).unwrap_or_default()
    }

    fn z_index(&self) -> i32 {
        self.core.nodes[self.id].viewport.z
    }

    fn is_accessible(&self) -> bool {
        self.core.is_accessible(self.id)
    }

    fn children(&self) -> &[NodeId] {
        &self.core.nodes[self.id].children
    }
}

impl Core {
    /// View a node as a container. Fails if the node is gone.
    pub fn container(&self, id: impl Into<NodeId>) -> Result<Box<dyn Container + '_>> {
        let id = id.into();
        self.node(id)?;
        if id == self.root {
            Ok(Box::new(RootContainer { core: self }))
        } else {
            Ok(Box::new(WidgetContainer { core: self, id }))
        }
    }

    /// The container a node is attached to, or `None` for the root.
    pub fn parent_container(&self, id: impl Into<NodeId>) -> Result<Option<Box<dyn Container + '_>>> {
        match self.node(id)?.parent {
            Some(parent) => self.container(parent).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::panel::Panel;

    #[test]
    fn root_and_widget_containers() -> Result<()> {
        let mut core = Core::default();
        core.resize_root(Expanse::new(40, 30))?;
        let root = core.root();
        let panel = core.add(root, Panel::new())?;
        core.set_size(panel, Expanse::new(10, 10))?;
        core.set_window_layer(panel, 2)?;

        let parent = core.parent_container(panel)?.ok_or(crate::Error::Internal("no parent".into()))?;
        assert!(parent.is_root());
        assert_eq!(parent.size(), Expanse::new(40, 30));
        assert_eq!(parent.children(), &[panel.id()]);
        assert!(core.parent_container(root)?.is_none());

        let container = core.container(panel)?;
        assert!(!container.is_root());
        assert_eq!(container.window_layer(), 2);
        assert!(container.is_accessible());
        Ok(())
    }
}
