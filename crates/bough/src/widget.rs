//! Widget trait, capability traits and event outcome types.

use std::any::{Any, type_name};

use crate::{
    Context, NodeId, ShortcutId,
    config::Config,
    core::viewport::{SpriteSet, Viewport},
    error::Result,
    event::{
        key::Key,
        mouse::{Button, MouseEvent},
    },
    geom::Expanse,
    name::NodeName,
};

/// The result of an event handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The event was processed, propagation stops and the node is redrawn.
    Handle,
    /// The event was processed without a state change and propagation stops.
    Consume,
    /// The event was not handled and dispatch continues.
    Ignore,
}

impl EventOutcome {
    /// Does this outcome stop propagation?
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

/// Per-node flags a widget fixes at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeOptions {
    /// Offset the node by its parent's scroll position.
    pub consider_scroll: bool,
    /// Count the node when its parent measures content for scrolling.
    pub scroll_participant: bool,
    /// Receive mouse input even below the active window layer.
    pub always_active_mouse: bool,
    /// The node is a scroll bar and never notifies its parent of bounds
    /// changes.
    pub is_scrollbar: bool,
}

impl Default for NodeOptions {
    fn default() -> Self {
        Self {
            consider_scroll: true,
            scroll_participant: true,
            always_active_mouse: false,
            is_scrollbar: false,
        }
    }
}

/// State handed to [`Widget::draw`]. Widgets write their sprites here.
pub struct DrawContext<'a> {
    /// Node being drawn.
    pub node: NodeId,
    /// Unclipped node size.
    pub size: Expanse,
    /// Resolved viewport.
    pub viewport: Viewport,
    /// The node's drawables.
    pub sprites: &'a mut SpriteSet,
    /// Is the pointer over the node?
    pub hovered: bool,
    /// Does the node hold keyboard focus?
    pub selected: bool,
    /// Active configuration.
    pub config: &'a Config,
}

/// Hover tracking.
pub trait Hoverable {
    /// The pointer moved. `inside` is true if it is over this node.
    fn on_mouse_moving(
        &mut self,
        _event: &MouseEvent,
        _inside: bool,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// The pointer entered or left the node.
    fn on_hover_changed(&mut self, _hovered: bool, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }
}

/// Button handling. Every callback receives the button that changed.
pub trait Pressable {
    /// A button went down anywhere in the window.
    fn on_mouse_down(
        &mut self,
        _event: &MouseEvent,
        _button: Button,
        _inside: bool,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A button went down over this node.
    fn on_mouse_down_inside(
        &mut self,
        _event: &MouseEvent,
        _button: Button,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A button came up anywhere in the window.
    fn on_mouse_up(
        &mut self,
        _event: &MouseEvent,
        _button: Button,
        _inside: bool,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A press that started over this node was released over it.
    fn on_click(
        &mut self,
        _event: &MouseEvent,
        _button: Button,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A second left click landed within the double-click window.
    fn on_double_click(
        &mut self,
        _event: &MouseEvent,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A press that started over this node was released elsewhere.
    fn on_release_outside(
        &mut self,
        _event: &MouseEvent,
        _button: Button,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A button is held. `started_inside` is true while dragging from this
    /// node.
    fn on_mouse_press(
        &mut self,
        _event: &MouseEvent,
        _button: Button,
        _started_inside: bool,
        _ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }
}

/// Wheel handling.
pub trait Scrollable {
    /// The wheel turned over this node.
    fn on_mouse_wheel(&mut self, _event: &MouseEvent, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }
}

/// Keyboard and text input for the selected widget.
pub trait TextEditable {
    /// Text arrived from the input method.
    fn on_text_input(&mut self, _text: &str, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A key went down.
    fn on_key_down(&mut self, _key: Key, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }
}

/// Containers that arrange their children.
///
/// Structural changes only call [`Layout::invalidate`]. The update pass
/// checks [`Layout::needs_update`] once per frame, calls
/// [`Layout::arrange`] and then [`Layout::clear_update`], so any number of
/// mutations in one frame cost one layout pass.
pub trait Layout {
    /// Is a layout pass pending?
    fn needs_update(&self) -> bool;

    /// Request a layout pass on the next update.
    fn invalidate(&mut self);

    /// Mark the pending layout pass as done.
    fn clear_update(&mut self);

    /// Recompute child positions and sizes.
    fn arrange(&mut self, ctx: &mut dyn Context) -> Result<()>;
}

/// The control surface a scroll bar exposes to the node it scrolls.
pub trait ScrollBarControl {
    /// Set the scroll position and thumb size, both as fractions in `0..=1`.
    fn set_range(&mut self, value: f32, slider: f32);
}

/// Widgets are the behavior attached to nodes in the Core arena.
///
/// Every method has a default, so a widget only implements what it needs.
/// Input capabilities are exposed through the accessor methods, which
/// return `None` unless overridden.
pub trait Widget: Any {
    /// Name used in dumps and logs.
    fn name(&self) -> NodeName {
        NodeName::of_type(type_name::<Self>())
    }

    /// Flags for the node hosting this widget, read once at creation.
    fn options(&self) -> NodeOptions {
        NodeOptions::default()
    }

    /// Can this widget take keyboard focus by being clicked?
    fn selectable(&self) -> bool {
        false
    }

    /// Regenerate sprites. Called at most once per frame, after a redraw
    /// request.
    fn draw(&mut self, _dc: &mut DrawContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Per-frame hook, run before layout and drawing.
    fn update(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// Called once, right after the node is attached.
    fn on_mount(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// Veto hook for an explicit dispose of this node. Returning false
    /// aborts the dispose. Not consulted when the widget disposes itself
    /// from one of its own callbacks.
    fn before_dispose(&mut self, _ctx: &mut dyn Context) -> bool {
        true
    }

    /// Called once as the node leaves the arena, before its descendants'
    /// hooks. When the widget disposes itself from one of its own
    /// callbacks, this runs after that callback returns, once the subtree
    /// is already gone; `ctx` then refers to a disposed node.
    fn on_dispose(&mut self, _ctx: &mut dyn Context) {}

    /// The node's position changed.
    fn on_position_changed(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// The node's size changed.
    fn on_size_changed(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// The parent's size changed.
    fn on_parent_size_changed(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// A child moved, resized, appeared or went away.
    fn on_child_bounds_changed(&mut self, _child: NodeId, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// The node gained keyboard focus.
    fn on_selected(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// The node lost keyboard focus.
    fn on_deselected(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// A shortcut owned by this node fired.
    fn on_shortcut(&mut self, _id: ShortcutId, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// An item of a context menu opened for this node was chosen.
    fn on_menu_item(&mut self, _index: usize, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// Hover capability.
    fn hoverable(&mut self) -> Option<&mut dyn Hoverable> {
        None
    }

    /// Button capability.
    fn pressable(&mut self) -> Option<&mut dyn Pressable> {
        None
    }

    /// Wheel capability.
    fn scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        None
    }

    /// Keyboard capability.
    fn text_editable(&mut self) -> Option<&mut dyn TextEditable> {
        None
    }

    /// Layout capability.
    fn layout(&mut self) -> Option<&mut dyn Layout> {
        None
    }

    /// Scroll bar capability.
    fn scroll_bar(&mut self) -> Option<&mut dyn ScrollBarControl> {
        None
    }
}

/// Convert widgets into boxed trait objects.
impl<W> From<W> for Box<dyn Widget>
where
    W: Widget + 'static,
{
    fn from(widget: W) -> Self {
        Box::new(widget)
    }
}
