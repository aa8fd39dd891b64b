use std::result::Result as StdResult;

use thiserror::Error;

use crate::{NodeId, geom::Axis};

/// Result type for bough operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
///
/// Every variant other than `Config` indicates a wiring bug in the calling
/// code. They are returned to the call site that misused the API and should
/// be propagated, not swallowed.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The node handle refers to a disposed node, or never existed.
    #[error("node {0:?} is disposed")]
    Disposed(NodeId),

    /// A widget was borrowed again while one of its own callbacks was running.
    #[error("widget for {0:?} is already borrowed")]
    ReentrantWidgetBorrow(NodeId),

    /// Auto-scroll needed a scroll bar on an axis that has none linked.
    #[error("{axis} auto-scroll on {node:?} has no linked scroll bar")]
    MissingScrollBar {
        /// Node with auto-scroll enabled.
        node: NodeId,
        /// Axis that overflowed.
        axis: Axis,
    },

    /// A child could not be removed from a parent that still listed it.
    #[error("failed to detach {child:?} from {parent:?}")]
    DetachFailed {
        /// Parent that listed the child.
        parent: NodeId,
        /// Child being detached.
        child: NodeId,
    },

    /// The operation is not supported on the root container.
    #[error("unsupported on root container: {0}")]
    RootUnsupported(&'static str),

    /// A timer was reset, destroyed or queried without existing.
    #[error("timer not found: {0}")]
    TimerNotFound(String),

    /// Re-parenting would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Requested parent.
        parent: NodeId,
        /// Node being attached.
        child: NodeId,
    },

    /// A typed widget accessor was used with the wrong widget type.
    #[error("widget for {0:?} has a different type")]
    WidgetType(NodeId),

    /// A configuration document could not be parsed.
    #[error("config: {0}")]
    Config(String),

    /// Invalid input error.
    #[error("invalid: {0}")]
    Invalid(String),

    /// Internal error.
    #[error("internal: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
