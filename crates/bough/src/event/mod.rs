//! Input events forwarded by the window collaborator.

/// Keyboard input.
pub mod key;
/// Pointer input.
pub mod mouse;

use crate::geom::Expanse;

/// The window's client area changed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEvent {
    /// New client area size.
    pub size: Expanse,
}

/// Text produced by the platform's input method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEvent {
    /// Text to insert.
    pub text: String,
    /// Set once a widget has consumed the text.
    pub handled: bool,
}

impl TextEvent {
    /// Construct an unhandled text event.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            handled: false,
        }
    }
}
