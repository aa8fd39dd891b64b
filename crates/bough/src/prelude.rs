//! Convenience re-exports for common bough types.

pub use crate::{
    Context, Core, EventOutcome, NodeId, ShortcutId, TypedId, Ui, Widget,
    config::Config,
    core::{
        focus::FocusManager,
        node::{AutoScroll, Dock, HDock, VDock},
        shortcut::{Chord, ShortcutScope},
        timer::TimerKey,
        viewport::{Color, Sprite, SpriteKey, SpriteSet, Viewport},
    },
    error,
    event::{
        SizeEvent, TextEvent,
        key::{Key, KeyCode, Mods},
        mouse::{Button, ButtonState, MouseEvent, MouseEventKind},
    },
    geom::{Axis, Expanse, Margins, Point, Rect},
    name::NodeName,
    render::Renderer,
    widget::{
        DrawContext, Hoverable, Layout, NodeOptions, Pressable, ScrollBarControl, Scrollable,
        TextEditable,
    },
    widgets::{Button as ButtonWidget, ContextMenu, Grid, MenuItem, Panel, ScrollBar, Stack, Tooltip},
};

/// Common result alias for bough operations.
pub type Result<T> = error::Result<T>;
