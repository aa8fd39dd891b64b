use crate::{
    core::viewport::{Color, Sprite, SpriteKey},
    error::Result,
    widget::{DrawContext, Widget},
};

/// A plain container. It draws an optional background and otherwise leaves
/// its children where they are put; pair it with auto-scroll and scroll bars
/// to get a scrolling view.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    /// Background fill.
    background: Option<Color>,
}

impl Panel {
    /// A panel with no background.
    pub fn new() -> Self {
        Self::default()
    }

    /// A panel filled with a colour.
    pub fn with_background(color: Color) -> Self {
        Self {
            background: Some(color),
        }
    }

    /// Background fill.
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl Widget for Panel {
    fn draw(&mut self, dc: &mut DrawContext<'_>) -> Result<()> {
        if let Some(color) = self.background {
            dc.sprites
                .set(SpriteKey::Background, Sprite::filled(dc.size.rect(), color));
        }
        Ok(())
    }
}
