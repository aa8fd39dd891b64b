//! Keyboard primitives: key codes, modifier state and keystrokes.
use std::ops::Add;

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Mods {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
    /// Control only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, c: char) -> Self::Output {
        Key {
            mods: self,
            key: KeyCode::Char(c),
        }
    }
}

/// Logical key codes.
#[derive(Debug, PartialOrd, Ord, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up key.
    PageUp,
    /// Page down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
    /// Function key, `F(1)` is F1.
    F(u8),
    /// A character key, unshifted.
    Char(char),
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// A keystroke along with modifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl From<KeyCode> for Key {
    fn from(key: KeyCode) -> Self {
        Self {
            mods: Mods::NONE,
            key,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        KeyCode::Char(c).into()
    }
}
