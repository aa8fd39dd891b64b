//! Helpers for driving a [`Ui`](crate::Ui) from tests.

/// Harness with a virtual clock and pointer.
pub mod harness;
/// Renderer that records what it was asked to present.
pub mod render;

pub use harness::Harness;
pub use render::{Frame, Presented, RecordingRenderer};
