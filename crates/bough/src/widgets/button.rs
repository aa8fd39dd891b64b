use crate::{
    Context,
    core::viewport::{Color, Sprite, SpriteKey},
    error::Result,
    event::mouse::{Button as MouseButton, MouseEvent},
    widget::{DrawContext, EventOutcome, Hoverable, Pressable, Widget},
};

const FACE: Color = Color::rgb(64, 64, 72);
const FACE_HOVER: Color = Color::rgb(84, 84, 96);
const FACE_DOWN: Color = Color::rgb(40, 40, 48);
const FOCUS: Color = Color::rgb(70, 110, 170);

/// A push button. It takes focus when clicked and counts left clicks.
#[derive(Debug, Clone, Default)]
pub struct Button {
    /// Caption.
    label: String,
    /// Left clicks delivered so far.
    clicks: usize,
    /// Double clicks delivered so far.
    double_clicks: usize,
    /// Held down with the pointer over it.
    down: bool,
}

impl Button {
    /// A button with a caption.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Caption.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Left clicks delivered so far.
    pub fn clicks(&self) -> usize {
        self.clicks
    }

    /// Double clicks delivered so far.
    pub fn double_clicks(&self) -> usize {
        self.double_clicks
    }
}

impl Hoverable for Button {
    fn on_hover_changed(&mut self, _hovered: bool, ctx: &mut dyn Context) -> Result<()> {
        ctx.redraw()
    }
}

impl Pressable for Button {
    fn on_mouse_down_inside(
        &mut self,
        _event: &MouseEvent,
        button: MouseButton,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        if button != MouseButton::Left {
            return Ok(EventOutcome::Ignore);
        }
        self.down = true;
        Ok(EventOutcome::Handle)
    }

    fn on_mouse_up(
        &mut self,
        _event: &MouseEvent,
        button: MouseButton,
        _inside: bool,
        ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        if button == MouseButton::Left && std::mem::take(&mut self.down) {
            ctx.redraw()?;
        }
        Ok(EventOutcome::Ignore)
    }

    fn on_click(
        &mut self,
        _event: &MouseEvent,
        button: MouseButton,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        if button != MouseButton::Left {
            return Ok(EventOutcome::Ignore);
        }
        self.clicks += 1;
        Ok(EventOutcome::Handle)
    }

    fn on_double_click(&mut self, _event: &MouseEvent, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        self.double_clicks += 1;
        Ok(EventOutcome::Handle)
    }
}

impl Widget for Button {
    fn selectable(&self) -> bool {
        true
    }

    fn draw(&mut self, dc: &mut DrawContext<'_>) -> Result<()> {
        let face = if self.down {
            FACE_DOWN
        } else if dc.hovered {
            FACE_HOVER
        } else {
            FACE
        };
        let rect = dc.size.rect();
        dc.sprites
            .set(SpriteKey::Background, Sprite::filled(rect, face));
        dc.sprites
            .set(SpriteKey::Content, Sprite::text(rect, self.label.clone()));
        if dc.selected {
            dc.sprites
                .set(SpriteKey::Border, Sprite::filled(rect, FOCUS));
        } else {
            dc.sprites.remove(&SpriteKey::Border);
        }
        Ok(())
    }

    fn on_selected(&mut self, ctx: &mut dyn Context) -> Result<()> {
        ctx.redraw()
    }

    fn on_deselected(&mut self, ctx: &mut dyn Context) -> Result<()> {
        ctx.redraw()
    }

    fn hoverable(&mut self) -> Option<&mut dyn Hoverable> {
        Some(self)
    }

    fn pressable(&mut self) -> Option<&mut dyn Pressable> {
        Some(self)
    }
}
