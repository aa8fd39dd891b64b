use tracing::debug;

use crate::{
    Context, NodeId,
    core::viewport::{Color, Sprite, SpriteKey},
    error::Result,
    event::mouse::{Button, MouseEvent},
    geom::Rect,
    widget::{DrawContext, EventOutcome, Hoverable, NodeOptions, Pressable, Widget},
};

const BACKGROUND: Color = Color::rgb(50, 50, 56);
const HIGHLIGHT: Color = Color::rgb(70, 110, 170);

/// One row of a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown.
    pub label: String,
    /// Disabled items are drawn but cannot be chosen.
    pub enabled: bool,
}

impl MenuItem {
    /// An enabled item.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    /// A disabled item.
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
        }
    }
}

/// A popup list of items opened on behalf of an owner node.
///
/// The core opens it one window layer above the active layer and makes it
/// the active widget, so everything below stops taking input. Choosing an
/// item or clicking anywhere else closes it.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    /// Node that receives the chosen item.
    owner: NodeId,
    /// Rows, top to bottom.
    items: Vec<MenuItem>,
    /// Row under the pointer.
    hovered: Option<usize>,
}

impl ContextMenu {
    /// A menu for `owner`.
    pub fn new(owner: NodeId, items: Vec<MenuItem>) -> Self {
        Self {
            owner,
            items,
            hovered: None,
        }
    }

    /// Node that receives the chosen item.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Rows, top to bottom.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Row under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The row at a window-space position, if any.
    fn row_at(&self, event: &MouseEvent, ctx: &dyn Context) -> Result<Option<usize>> {
        let vp = ctx.viewport()?;
        if !vp.contains(event.position) {
            return Ok(None);
        }
        let height = ctx.config().menu_item_height.max(1);
        let y = event.position.y - vp.content_origin().y;
        let row = (y.max(0) as u32 / height) as usize;
        Ok((row < self.items.len()).then_some(row))
    }

    /// Dispose the popup.
    fn close(&self, ctx: &mut dyn Context) -> Result<()> {
        debug!(owner = ?self.owner, "context menu closed");
        ctx.dispose()?;
        Ok(())
    }
}

impl Hoverable for ContextMenu {
    fn on_mouse_moving(
        &mut self,
        event: &MouseEvent,
        _inside: bool,
        ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        let row = self.row_at(event, ctx)?;
        if row != self.hovered {
            self.hovered = row;
            ctx.redraw()?;
        }
        Ok(EventOutcome::Ignore)
    }

    fn on_hover_changed(&mut self, hovered: bool, ctx: &mut dyn Context) -> Result<()> {
        if !hovered && self.hovered.take().is_some() {
            ctx.redraw()?;
        }
        Ok(())
    }
}

impl Pressable for ContextMenu {
    fn on_mouse_down(
        &mut self,
        _event: &MouseEvent,
        _button: Button,
        inside: bool,
        ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        if inside {
            return Ok(EventOutcome::Consume);
        }
        self.close(ctx)?;
        Ok(EventOutcome::Consume)
    }

    fn on_click(
        &mut self,
        event: &MouseEvent,
        button: Button,
        ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        if button != Button::Left {
            return Ok(EventOutcome::Consume);
        }
        let Some(index) = self.row_at(event, ctx)? else {
            return Ok(EventOutcome::Consume);
        };
        if !self.items[index].enabled {
            return Ok(EventOutcome::Consume);
        }
        let owner = self.owner;
        self.close(ctx)?;
        let core = ctx.core_mut();
        if core.contains(owner) {
            debug!(?owner, index, "menu item chosen");
            core.notify(owner, |w, ctx| w.on_menu_item(index, ctx))?;
        }
        Ok(EventOutcome::Consume)
    }
}

impl Widget for ContextMenu {
    fn options(&self) -> NodeOptions {
        NodeOptions {
            consider_scroll: false,
            scroll_participant: false,
            ..NodeOptions::default()
        }
    }

    fn draw(&mut self, dc: &mut DrawContext<'_>) -> Result<()> {
        dc.sprites
            .set(SpriteKey::Background, Sprite::filled(dc.size.rect(), BACKGROUND));
        let height = dc.config.menu_item_height;
        for (i, item) in self.items.iter().enumerate() {
            let row = Rect::new(0, (i as u32 * height) as i32, dc.size.w, height);
            dc.sprites.set(
                SpriteKey::Custom(format!("item_{i}")),
                Sprite::text(row, item.label.clone()),
            );
        }
        match self.hovered.filter(|i| self.items[*i].enabled) {
            Some(i) => {
                let row = Rect::new(0, (i as u32 * height) as i32, dc.size.w, height);
                dc.sprites.set(SpriteKey::Overlay, Sprite::filled(row, HIGHLIGHT));
            }
            None => {
                dc.sprites.remove(&SpriteKey::Overlay);
            }
        }
        Ok(())
    }

    fn hoverable(&mut self) -> Option<&mut dyn Hoverable> {
        Some(self)
    }

    fn pressable(&mut self) -> Option<&mut dyn Pressable> {
        Some(self)
    }
}
