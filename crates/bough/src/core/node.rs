use crate::{
    NodeId,
    core::{
        mouse::MouseManager,
        timer::Timers,
        viewport::{SpriteSet, Viewport},
    },
    geom::{Expanse, Margins, Point},
    name::NodeName,
    widget::{NodeOptions, Widget},
    widgets::context_menu::MenuItem,
};

/// Horizontal docking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HDock {
    /// Position and width are free.
    #[default]
    None,
    /// Width fills the parent between margins.
    Fill,
    /// Hug the parent's left edge.
    Left,
    /// Hug the parent's right edge.
    Right,
}

/// Vertical docking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VDock {
    /// Position and height are free.
    #[default]
    None,
    /// Height fills the parent between margins.
    Fill,
    /// Hug the parent's top edge.
    Top,
    /// Hug the parent's bottom edge.
    Bottom,
}

/// Docking constraints on both axes. Left/right and top/bottom are each a
/// single enum, so the exclusive pairs cannot both be set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dock {
    /// Horizontal constraint.
    pub horizontal: HDock,
    /// Vertical constraint.
    pub vertical: VDock,
}

impl Dock {
    /// Fill the parent on both axes.
    pub fn fill() -> Self {
        Self {
            horizontal: HDock::Fill,
            vertical: VDock::Fill,
        }
    }

    /// True if neither axis is constrained.
    pub fn is_free(&self) -> bool {
        self.horizontal == HDock::None && self.vertical == VDock::None
    }
}

/// Automatic content measurement flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AutoScroll {
    /// Scroll horizontally when content overflows.
    pub horizontal: bool,
    /// Scroll vertically when content overflows.
    pub vertical: bool,
    /// Resize to fit the content instead of scrolling.
    pub resize: bool,
}

impl AutoScroll {
    /// True if any measurement is enabled.
    pub fn enabled(&self) -> bool {
        self.horizontal || self.vertical || self.resize
    }
}

/// Scroll bars linked to a node. The links do not own the bars.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBars {
    /// Horizontal bar.
    pub horizontal: Option<NodeId>,
    /// Vertical bar.
    pub vertical: Option<NodeId>,
}

/// Help text state for a node.
#[derive(Debug, Default, Clone)]
pub(crate) struct Help {
    /// Text shown in the tooltip.
    pub(crate) text: Option<String>,
    /// The tooltip node while it is open.
    pub(crate) popup: Option<NodeId>,
}

/// Core node data stored in the arena.
pub struct Node {
    /// Widget behavior and state. Empty while one of its callbacks runs.
    pub(crate) widget: Option<Box<dyn Widget>>,
    /// Rust type name of the widget.
    pub(crate) widget_type: &'static str,
    /// Node name for dumps and logs.
    pub(crate) name: NodeName,

    /// Parent in the arena tree. Only the root has none.
    pub(crate) parent: Option<NodeId>,
    /// Children in the arena tree, in insertion order.
    pub(crate) children: Vec<NodeId>,

    /// Position relative to the parent's content origin.
    pub(crate) position: Point,
    /// Unclipped size.
    pub(crate) size: Expanse,
    /// Lower size clamp.
    pub(crate) min_size: Expanse,
    /// Upper size clamp.
    pub(crate) max_size: Expanse,
    /// Space kept around the node inside its parent.
    pub(crate) margins: Margins,
    /// Docking constraints.
    pub(crate) dock: Dock,

    /// Own window layer; the effective layer is the max over ancestors.
    pub(crate) window_layer: i32,
    /// Z offset from the parent.
    pub(crate) z_delta: i32,
    /// Own visibility flag.
    pub(crate) visible: bool,

    /// Scroll offset applied to children that consider scrolling.
    pub(crate) scroll: Point,
    /// Content measurement flags.
    pub(crate) auto_scroll: AutoScroll,
    /// Extent of the content measured on the last auto-scroll pass.
    pub(crate) max_child: Expanse,
    /// Linked scroll bars.
    pub(crate) scrollbars: ScrollBars,
    /// Creation-time flags.
    pub(crate) options: NodeOptions,

    /// Resolved screen-space geometry.
    pub(crate) viewport: Viewport,
    /// Drawables.
    pub(crate) sprites: SpriteSet,
    /// Set once sprites are current; cleared by a redraw request.
    pub(crate) drawn: bool,

    /// Input routing state.
    pub(crate) mouse: MouseManager,
    /// Countdowns polled on update.
    pub(crate) timers: Timers,
    /// Hover help.
    pub(crate) help: Help,
    /// Context menu waiting to open on the next update.
    pub(crate) pending_menu: Option<Vec<MenuItem>>,
}

impl Node {
    /// Construct a detached node around a widget.
    pub(crate) fn new(widget: Box<dyn Widget>, widget_type: &'static str) -> Self {
        let name = widget.name();
        let options = widget.options();
        Self {
            widget: Some(widget),
            widget_type,
            name,
            parent: None,
            children: Vec::new(),
            position: Point::zero(),
            size: Expanse::default(),
            min_size: Expanse::default(),
            max_size: Expanse::max_value(),
            margins: Margins::default(),
            dock: Dock::default(),
            window_layer: 0,
            z_delta: 0,
            visible: true,
            scroll: Point::zero(),
            auto_scroll: AutoScroll::default(),
            max_child: Expanse::default(),
            scrollbars: ScrollBars::default(),
            options,
            viewport: Viewport::default(),
            sprites: SpriteSet::default(),
            drawn: false,
            mouse: MouseManager::default(),
            timers: Timers::default(),
            help: Help::default(),
            pending_menu: None,
        }
    }

    /// Return the node's name.
    pub fn name(&self) -> &NodeName {
        &self.name
    }

    /// Return the widget's Rust type name.
    pub fn widget_type(&self) -> &'static str {
        self.widget_type
    }

    /// Return the node's parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return the node's children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Position relative to the parent's content origin.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Unclipped size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Minimum size clamp.
    pub fn min_size(&self) -> Expanse {
        self.min_size
    }

    /// Maximum size clamp.
    pub fn max_size(&self) -> Expanse {
        self.max_size
    }

    /// Margins.
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Docking constraints.
    pub fn dock(&self) -> Dock {
        self.dock
    }

    /// The node's own window layer, before inheritance.
    pub fn own_window_layer(&self) -> i32 {
        self.window_layer
    }

    /// Z delta relative to the parent.
    pub fn z_delta(&self) -> i32 {
        self.z_delta
    }

    /// The node's own visibility flag.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Scroll offset.
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    /// Auto-scroll flags.
    pub fn auto_scroll(&self) -> AutoScroll {
        self.auto_scroll
    }

    /// Content extent from the last auto-scroll pass.
    pub fn max_child(&self) -> Expanse {
        self.max_child
    }

    /// Linked scroll bars.
    pub fn scrollbars(&self) -> ScrollBars {
        self.scrollbars
    }

    /// Creation-time flags.
    pub fn options(&self) -> NodeOptions {
        self.options
    }

    /// Resolved viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Drawables.
    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Are the node's sprites current?
    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    /// Is the pointer over this node?
    pub fn is_hovered(&self) -> bool {
        self.mouse.inside
    }

    /// Pointer state.
    pub fn mouse(&self) -> &MouseManager {
        &self.mouse
    }

    /// Countdowns.
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Help text, if any.
    pub fn help_text(&self) -> Option<&str> {
        self.help.text.as_deref()
    }

    /// The open help tooltip, if any.
    pub fn help_popup(&self) -> Option<NodeId> {
        self.help.popup
    }
}
