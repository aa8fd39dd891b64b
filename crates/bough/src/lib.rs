//! bough: a retained-mode widget tree.
//!
//! Nodes live in an arena owned by [`Core`]. Each node carries geometry,
//! visibility, a window layer and z order, scroll state and a set of
//! sprites; behavior is attached through the [`Widget`] trait and a small
//! set of capability traits. The core resolves clipped viewports top-down,
//! keeps scroll bars in sync with content, routes pointer and keyboard input
//! through the tree with modal layering, and runs a per-frame update pass
//! that coalesces layout and redraw requests.
//!
//! The main entry points are:
//! - [`Ui`] - the window-level input pump and frame driver
//! - [`Core`] - the arena, bounds engine and focus manager
//! - [`Widget`] - the trait implemented by all widgets
//!
//! Rendering is left to a [`Renderer`](render::Renderer) collaborator that
//! reads each node's viewport and sprites.

#![warn(missing_docs)]

mod core;
mod id;

pub mod config;
pub mod error;
pub mod event;
pub mod name;
pub mod prelude;
pub mod render;
pub mod testing;
pub mod ui;
pub mod widget;
pub mod widgets;

pub use crate::core::{
    Context, Core, CoreContext, UiContext, bounds, container, dump, focus, mouse, node, shortcut,
    timer, update, viewport,
};

pub use error::{Error, Result};
pub use geom;
pub use id::{NodeId, ShortcutId, TypedId};
pub use ui::Ui;
pub use widget::{EventOutcome, Widget};
