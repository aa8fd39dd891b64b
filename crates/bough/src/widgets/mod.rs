//! Built-in widgets.

/// Push button.
pub mod button;
/// Context menu popup.
pub mod context_menu;
/// Fixed grid layout.
pub mod grid;
/// Plain container with an optional background.
pub mod panel;
/// Scroll bar.
pub mod scrollbar;
/// Stack layout.
pub mod stack;
/// Help text popup.
pub mod tooltip;

pub use button::Button;
pub use context_menu::{ContextMenu, MenuItem};
pub use grid::Grid;
pub use panel::Panel;
pub use scrollbar::ScrollBar;
pub use stack::Stack;
pub use tooltip::Tooltip;
