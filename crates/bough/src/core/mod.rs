//! The node arena, bounds engine and input routing.

/// Viewport resolution, docking and auto-scroll.
pub mod bounds;
/// The uniform parent surface for root and widgets.
pub mod container;
/// Callback context.
pub mod context;
/// Debug dump utilities.
pub mod dump;
/// Keyboard focus.
pub mod focus;
/// Per-node pointer routing.
pub mod mouse;
/// Node data.
pub mod node;
/// Keyboard shortcuts.
pub mod shortcut;
/// Per-node countdowns.
pub mod timer;
/// The per-frame update walk.
pub mod update;
/// Viewports and sprites.
pub mod viewport;
/// The arena.
pub mod world;

pub use context::{Context, CoreContext};
pub use world::{Core, UiContext};
