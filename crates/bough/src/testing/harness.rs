use std::time::{Duration, Instant};

use super::render::RecordingRenderer;
use crate::{
    NodeId,
    config::Config,
    core::Core,
    error::Result,
    event::mouse::{Button, ButtonState, MouseEvent},
    geom::{Expanse, Point},
    ui::Ui,
};

/// A [`Ui`] with a virtual clock, a virtual pointer and a recording
/// renderer. Tests drive input through the helpers and step frames with
/// [`Harness::tick`] and [`Harness::advance`].
pub struct Harness {
    /// The UI under test.
    pub ui: Ui,
    /// Recorder shared with the UI.
    pub renderer: RecordingRenderer,
    /// Virtual frame clock.
    now: Instant,
    /// Pointer position.
    pointer: Point,
    /// Current button state.
    buttons: ButtonState,
}

impl Harness {
    /// A harness with the default configuration.
    pub fn new(size: Expanse) -> Result<Self> {
        Self::with_config(size, Config::default())
    }

    /// A harness with an explicit configuration.
    pub fn with_config(size: Expanse, config: Config) -> Result<Self> {
        let renderer = RecordingRenderer::new();
        let ui = Ui::with_config(size, config, renderer.clone())?;
        Ok(Self {
            ui,
            renderer,
            now: Instant::now(),
            pointer: Point::zero(),
            buttons: ButtonState::default(),
        })
    }

    /// The arena.
    pub fn core(&self) -> &Core {
        &self.ui.core
    }

    /// The arena, mutably.
    pub fn core_mut(&mut self) -> &mut Core {
        &mut self.ui.core
    }

    /// Root container.
    pub fn root(&self) -> NodeId {
        self.ui.root()
    }

    /// Virtual clock.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// An event at the pointer carrying the current button state.
    fn event(&self) -> MouseEvent {
        MouseEvent::at(self.pointer).with_buttons(self.buttons)
    }

    /// Move the pointer. While a button is held this is a drag, so a press
    /// event follows the move. Returns whether the move was handled.
    pub fn move_to(&mut self, position: impl Into<Point>) -> Result<bool> {
        self.pointer = position.into();
        self.buttons = self.buttons.settle();
        let mut event = self.event();
        self.ui.process_mouse_moving(&mut event)?;
        if self.buttons.current.iter().any(|b| *b) {
            let mut held = self.event();
            self.ui.process_mouse_press(&mut held)?;
        }
        Ok(event.handled)
    }

    /// Put a button down at the pointer. Returns whether it was handled.
    pub fn press(&mut self, button: Button) -> Result<bool> {
        self.buttons = self.buttons.advance(button, true);
        let mut event = self.event();
        self.ui.process_mouse_down(&mut event)?;
        self.buttons = self.buttons.settle();
        Ok(event.handled)
    }

    /// Send a held-button event at the pointer without moving.
    pub fn hold(&mut self) -> Result<bool> {
        let mut event = self.event();
        self.ui.process_mouse_press(&mut event)?;
        Ok(event.handled)
    }

    /// Release a button at the pointer. Returns whether it was handled.
    pub fn release(&mut self, button: Button) -> Result<bool> {
        self.buttons = self.buttons.advance(button, false);
        let mut event = self.event();
        self.ui.process_mouse_up(&mut event)?;
        self.buttons = self.buttons.settle();
        Ok(event.handled)
    }

    /// Move to a position and click a button there.
    pub fn click_button(&mut self, position: impl Into<Point>, button: Button) -> Result<()> {
        self.move_to(position)?;
        self.press(button)?;
        self.release(button)?;
        Ok(())
    }

    /// Move to a position and left-click there.
    pub fn click(&mut self, position: impl Into<Point>) -> Result<()> {
        self.click_button(position, Button::Left)
    }

    /// Turn the wheel at the pointer. Returns whether it was handled.
    pub fn wheel(&mut self, dx: i32, dy: i32) -> Result<bool> {
        let mut event = self.event().with_wheel(dx, dy);
        self.ui.process_mouse_wheel(&mut event)?;
        Ok(event.handled)
    }

    /// Run one frame at the current virtual time.
    pub fn tick(&mut self) -> Result<()> {
        self.ui.frame(self.now)
    }

    /// Advance the virtual clock, then run a frame.
    pub fn advance(&mut self, by: Duration) -> Result<()> {
        self.now += by;
        self.tick()
    }
}
