use crate::{
    Context,
    core::viewport::{Color, Sprite, SpriteKey},
    error::Result,
    geom::{Expanse, Rect},
    widget::{DrawContext, NodeOptions, Widget},
};

/// Nominal glyph advance used to size popups. Real shaping belongs to the
/// renderer, so this only has to be close.
pub const CHAR_WIDTH: u32 = 7;
/// Height of a single text line.
pub const LINE_HEIGHT: u32 = 16;
/// Space around the text.
const PADDING: u32 = 4;

const BACKGROUND: Color = Color::rgb(255, 255, 225);

/// A help text popup. Opened and closed by the core when its owner is
/// hovered; it never takes input itself.
#[derive(Debug, Clone)]
pub struct Tooltip {
    /// Text shown.
    text: String,
}

impl Tooltip {
    /// A popup showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Text shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size needed to show the text on one line per `\n`.
    pub fn measure(text: &str) -> Expanse {
        let lines = text.lines().count().max(1) as u32;
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
        Expanse::new(widest * CHAR_WIDTH + 2 * PADDING, lines * LINE_HEIGHT + 2 * PADDING)
    }
}

impl Widget for Tooltip {
    fn options(&self) -> NodeOptions {
        NodeOptions {
            consider_scroll: false,
            scroll_participant: false,
            ..NodeOptions::default()
        }
    }

    fn on_mount(&mut self, ctx: &mut dyn Context) -> Result<()> {
        ctx.set_size(Self::measure(&self.text))
    }

    fn draw(&mut self, dc: &mut DrawContext<'_>) -> Result<()> {
        let size = dc.size;
        dc.sprites
            .set(SpriteKey::Background, Sprite::filled(size.rect(), BACKGROUND));
        let text = Rect::new(
            PADDING as i32,
            PADDING as i32,
            size.w.saturating_sub(2 * PADDING),
            size.h.saturating_sub(2 * PADDING),
        );
        dc.sprites
            .set(SpriteKey::Content, Sprite::text(text, self.text.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_lines() {
        assert_eq!(Tooltip::measure("abc"), Expanse::new(29, 24));
        assert_eq!(Tooltip::measure("a\nlonger"), Expanse::new(50, 40));
        assert_eq!(Tooltip::measure(""), Expanse::new(8, 24));
    }
}
