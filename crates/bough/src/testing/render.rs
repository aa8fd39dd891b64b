use std::{cell::RefCell, rc::Rc};

use crate::{
    NodeId,
    core::viewport::{SpriteSet, Viewport},
    error::Result,
    render::Renderer,
};

/// One node as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presented {
    /// Node drawn.
    pub node: NodeId,
    /// Its viewport at present time.
    pub viewport: Viewport,
    /// Its sprites at present time.
    pub sprites: SpriteSet,
}

/// Everything presented between `begin` and `finish`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Nodes in the order they were presented.
    pub nodes: Vec<Presented>,
}

impl Frame {
    /// Node ids in presentation order.
    pub fn order(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|p| p.node).collect()
    }

    /// The presented record for a node.
    pub fn get(&self, node: impl Into<NodeId>) -> Option<&Presented> {
        let node = node.into();
        self.nodes.iter().find(|p| p.node == node)
    }
}

/// Shared recording state. Clones of a renderer see the same frames.
#[derive(Debug, Default)]
struct Recording {
    /// Completed frames.
    frames: Vec<Frame>,
    /// Frame being built.
    current: Frame,
    /// Nodes released so far.
    released: Vec<NodeId>,
}

/// A renderer that keeps a copy of every frame. Hand one clone to the
/// [`Ui`](crate::Ui) and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Shared state.
    state: Rc<RefCell<Recording>>,
}

impl RecordingRenderer {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed frames.
    pub fn frame_count(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// The most recent completed frame.
    pub fn last_frame(&self) -> Option<Frame> {
        self.state.borrow().frames.last().cloned()
    }

    /// Every completed frame.
    pub fn frames(&self) -> Vec<Frame> {
        self.state.borrow().frames.clone()
    }

    /// Nodes released so far.
    pub fn released(&self) -> Vec<NodeId> {
        self.state.borrow().released.clone()
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.frames.clear();
        state.released.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self) -> Result<()> {
        self.state.borrow_mut().current = Frame::default();
        Ok(())
    }

    fn present(&mut self, node: NodeId, viewport: &Viewport, sprites: &SpriteSet) -> Result<()> {
        self.state.borrow_mut().current.nodes.push(Presented {
            node,
            viewport: *viewport,
            sprites: sprites.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let frame = std::mem::take(&mut state.current);
        state.frames.push(frame);
        Ok(())
    }

    fn release(&mut self, node: NodeId) {
        self.state.borrow_mut().released.push(node);
    }
}
