use crate::{event::key::Mods, geom::Point};

/// Mouse button codes.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

impl Button {
    /// Every button, in index order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    /// Slot of this button in per-button arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
        }
    }
}

/// The kind of pointer event being dispatched.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MouseEventKind {
    /// The pointer moved.
    Moving,
    /// A button went down.
    Down,
    /// A button came up.
    Up,
    /// A button is being held.
    Press,
    /// The wheel turned.
    Wheel,
}

/// Button state for the current and the previous platform snapshot.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ButtonState {
    /// Buttons down now.
    pub current: [bool; 3],
    /// Buttons down in the previous snapshot.
    pub old: [bool; 3],
}

impl ButtonState {
    /// Roll the current state into `old` and apply a new state for one button.
    pub fn advance(&self, button: Button, down: bool) -> Self {
        let mut current = self.current;
        current[button.index()] = down;
        Self {
            current,
            old: self.current,
        }
    }

    /// Roll the current state into `old` without changing any button.
    pub fn settle(&self) -> Self {
        Self {
            current: self.current,
            old: self.current,
        }
    }
}

/// A pointer event snapshot.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct MouseEvent {
    /// Pointer position in window coordinates.
    pub position: Point,
    /// Button state deltas.
    pub buttons: ButtonState,
    /// Wheel movement, positive is down/right.
    pub wheel: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: Mods,
    /// Set by the first consumer; stops further dispatch.
    pub handled: bool,
}

impl MouseEvent {
    /// An event at a position with no buttons held.
    pub fn at(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            buttons: ButtonState::default(),
            wheel: Point::zero(),
            modifiers: Mods::default(),
            handled: false,
        }
    }

    /// Replace the button state.
    pub fn with_buttons(mut self, buttons: ButtonState) -> Self {
        self.buttons = buttons;
        self
    }

    /// Replace the wheel delta.
    pub fn with_wheel(mut self, dx: i32, dy: i32) -> Self {
        self.wheel = Point::new(dx, dy);
        self
    }

    /// Edge: the button is down now and was up before.
    pub fn triggered(&self, button: Button) -> bool {
        let i = button.index();
        self.buttons.current[i] && !self.buttons.old[i]
    }

    /// Level: the button is down now.
    pub fn pressed(&self, button: Button) -> bool {
        self.buttons.current[button.index()]
    }

    /// Edge: the button is up now and was down before.
    pub fn released(&self, button: Button) -> bool {
        let i = button.index();
        !self.buttons.current[i] && self.buttons.old[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_levels() {
        let down = ButtonState::default().advance(Button::Left, true);
        let e = MouseEvent::at((0, 0)).with_buttons(down);
        assert!(e.triggered(Button::Left));
        assert!(e.pressed(Button::Left));
        assert!(!e.released(Button::Left));

        let held = MouseEvent::at((0, 0)).with_buttons(down.settle());
        assert!(!held.triggered(Button::Left));
        assert!(held.pressed(Button::Left));

        let up = MouseEvent::at((0, 0)).with_buttons(down.advance(Button::Left, false));
        assert!(up.released(Button::Left));
        assert!(!up.pressed(Button::Left));
        assert!(!up.triggered(Button::Right));
    }
}
