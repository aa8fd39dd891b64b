//! The seam to the drawing collaborator.

use crate::{
    NodeId,
    core::{
        Core,
        viewport::{SpriteSet, Viewport},
    },
    error::Result,
};

/// Draws node sprites into actual pixels.
///
/// The core never touches pixels: once per frame it hands every visible
/// node's viewport and sprites to the renderer in z order, and reports
/// nodes whose resources can be freed.
pub trait Renderer {
    /// Start a frame.
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Draw one node. `viewport.rect` is the clip rect; sprite coordinates
    /// are local to the node's content origin plus each sprite's origin.
    fn present(&mut self, node: NodeId, viewport: &Viewport, sprites: &SpriteSet) -> Result<()>;

    /// Finish a frame.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    /// Free any resources held for a disposed node.
    fn release(&mut self, _node: NodeId) {}
}

/// Visible, non-empty nodes in draw order: ascending z, ties broken by tree
/// pre-order.
pub fn draw_order(core: &Core) -> Result<Vec<NodeId>> {
    let mut order: Vec<(i32, NodeId)> = core
        .preorder(core.root())?
        .into_iter()
        .filter_map(|id| {
            let vp = core.nodes.get(id)?.viewport;
            (vp.visible && !vp.rect.is_zero()).then_some((vp.z, id))
        })
        .collect();
    order.sort_by_key(|(z, _)| *z);
    Ok(order.into_iter().map(|(_, id)| id).collect())
}

/// Present a frame: forward pending releases, then draw in z order.
pub(crate) fn render(core: &mut Core, renderer: &mut dyn Renderer) -> Result<()> {
    for id in core.released.drain(..) {
        renderer.release(id);
    }
    renderer.begin()?;
    for id in draw_order(core)? {
        let node = core.node(id)?;
        renderer.present(id, &node.viewport, &node.sprites)?;
    }
    renderer.finish()
}

/// A renderer that draws nothing.
#[derive(Debug, Default)]
pub struct NopRenderer;

impl Renderer for NopRenderer {
    fn present(&mut self, _node: NodeId, _viewport: &Viewport, _sprites: &SpriteSet) -> Result<()> {
        Ok(())
    }
}
