//! Per-node pointer routing.
//!
//! One dispatch pass runs per platform event, rooted at the root container
//! and walked top-down. Each node records the snapshot, runs its own
//! callbacks if it is accessible, then hands the event to its children.
//! Hover is resolved after the children so transitions see their state.

use scopeguard::guard;
use tracing::trace;

use crate::{
    Context, NodeId,
    core::{Core, focus::FocusManager, timer::TimerKey},
    error::Result,
    event::mouse::{Button, MouseEvent, MouseEventKind},
    widget::{EventOutcome, Widget},
};

/// Pointer state tracked for one node.
#[derive(Debug, Default, Clone)]
pub struct MouseManager {
    /// Last event seen by this node.
    pub(crate) last: Option<MouseEvent>,
    /// Is the pointer over the node?
    pub(crate) inside: bool,
    /// Per-button latch armed by a press that started over the node.
    pub(crate) started_inside: [bool; 3],
    /// Set once the node has seen the current event.
    pub(crate) evaluated: bool,
}

impl MouseManager {
    /// Last event seen by this node.
    pub fn last_event(&self) -> Option<&MouseEvent> {
        self.last.as_ref()
    }

    /// Is the pointer over the node?
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Is a press that started over this node still held?
    pub fn started_inside(&self, button: Button) -> bool {
        self.started_inside[button.index()]
    }

    /// Has the node seen the event currently being dispatched?
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Drop every press latch.
    pub(crate) fn cancel(&mut self) {
        self.started_inside = [false; 3];
    }

    /// Dispatch an event to `id` and its subtree.
    ///
    /// With `root` set this is the top of a pass: every node's evaluated
    /// flag is reset afterwards, even on error, and a left press applies the
    /// selection it hit unless a callback changed focus during the pass.
    pub fn perform(
        core: &mut Core,
        id: NodeId,
        kind: MouseEventKind,
        event: &mut MouseEvent,
        root: bool,
    ) -> Result<()> {
        if !root {
            return dispatch(core, id, kind, event);
        }
        core.ui.pending_selection = None;
        let mut core = guard(core, |core| core.reset_evaluated());
        let generation = core.ui.focus_gen;
        dispatch(&mut core, id, kind, event)?;
        if kind == MouseEventKind::Down && event.triggered(Button::Left) {
            let target = core.ui.pending_selection.take();
            // A callback that moved focus during the pass wins.
            if core.ui.focus_gen == generation {
                core.set_selected(target)?;
            }
        }
        Ok(())
    }
}

impl Core {
    /// Clear the evaluated flag on every node.
    pub(crate) fn reset_evaluated(&mut self) {
        for node in self.nodes.values_mut() {
            node.mouse.evaluated = false;
        }
    }
}

/// Run one node's step of a dispatch pass, then its children's.
fn dispatch(core: &mut Core, id: NodeId, kind: MouseEventKind, event: &mut MouseEvent) -> Result<()> {
    let Some(node) = core.nodes.get_mut(id) else {
        return Ok(());
    };
    node.mouse.evaluated = true;
    if event.handled {
        return Ok(());
    }
    node.mouse.last = Some(*event);

    let accessible = core.is_accessible(id);
    trace!(?id, ?kind, accessible, position = ?event.position, "mouse dispatch");
    if accessible {
        match kind {
            MouseEventKind::Moving => moving(core, id, event)?,
            MouseEventKind::Down => down(core, id, event)?,
            MouseEventKind::Up => up(core, id, event)?,
            MouseEventKind::Press => press(core, id, event)?,
            MouseEventKind::Wheel => wheel(core, id, event)?,
        }
    }

    // Sweep until every live child has seen the event, so children added or
    // removed by a callback are tolerated.
    while let Some(child) = next_unevaluated(core, id) {
        dispatch(core, child, kind, event)?;
    }

    if !core.contains(id) {
        return Ok(());
    }
    match kind {
        MouseEventKind::Moving => hover(core, id, event),
        MouseEventKind::Wheel => wheel_scroll(core, id, event),
        _ => Ok(()),
    }
}

/// First child of `id` that has not seen the current event.
fn next_unevaluated(core: &Core, id: NodeId) -> Option<NodeId> {
    core.nodes.get(id)?.children.iter().copied().find(|child| {
        core.nodes
            .get(*child)
            .is_some_and(|n| n.parent == Some(id) && !n.mouse.evaluated)
    })
}

/// Invoke a callback and fold its outcome into the event.
fn deliver(
    core: &mut Core,
    id: NodeId,
    event: &mut MouseEvent,
    f: impl FnOnce(&mut dyn Widget, &MouseEvent, &mut dyn Context) -> Result<EventOutcome>,
) -> Result<()> {
    if !core.contains(id) {
        return Ok(());
    }
    let snapshot = *event;
    let outcome = core
        .notify(id, |w, ctx| f(w, &snapshot, ctx))?
        .unwrap_or(EventOutcome::Ignore);
    match outcome {
        EventOutcome::Handle => {
            event.handled = true;
            if core.contains(id) {
                core.redraw(id)?;
            }
        }
        EventOutcome::Consume => event.handled = true,
        EventOutcome::Ignore => {}
    }
    Ok(())
}

/// Is the pointer inside the node's viewport?
fn inside(core: &Core, id: NodeId, event: &MouseEvent) -> Result<bool> {
    Ok(core.node(id)?.viewport.contains(event.position))
}

/// Pointer motion.
fn moving(core: &mut Core, id: NodeId, event: &mut MouseEvent) -> Result<()> {
    let inside = inside(core, id, event)?;
    deliver(core, id, event, |w, ev, ctx| match w.hoverable() {
        Some(h) => h.on_mouse_moving(ev, inside, ctx),
        None => Ok(EventOutcome::Ignore),
    })
}

/// Button-down edges.
fn down(core: &mut Core, id: NodeId, event: &mut MouseEvent) -> Result<()> {
    let inside = inside(core, id, event)?;
    for button in Button::ALL {
        if !event.triggered(button) {
            continue;
        }
        deliver(core, id, event, |w, ev, ctx| match w.pressable() {
            Some(p) => p.on_mouse_down(ev, button, inside, ctx),
            None => Ok(EventOutcome::Ignore),
        })?;
        if !inside {
            continue;
        }
        let Some(node) = core.nodes.get_mut(id) else {
            return Ok(());
        };
        node.mouse.started_inside[button.index()] = true;
        let selectable = node.widget.as_ref().is_some_and(|w| w.selectable());
        if button == Button::Left && selectable {
            core.ui.pending_selection = Some(id);
        }
        deliver(core, id, event, |w, ev, ctx| match w.pressable() {
            Some(p) => p.on_mouse_down_inside(ev, button, ctx),
            None => Ok(EventOutcome::Ignore),
        })?;
    }
    Ok(())
}

/// Button-up edges, clicks and releases outside.
fn up(core: &mut Core, id: NodeId, event: &mut MouseEvent) -> Result<()> {
    let inside = inside(core, id, event)?;
    for button in Button::ALL {
        if !event.released(button) {
            continue;
        }
        deliver(core, id, event, |w, ev, ctx| match w.pressable() {
            Some(p) => p.on_mouse_up(ev, button, inside, ctx),
            None => Ok(EventOutcome::Ignore),
        })?;
        let Some(node) = core.nodes.get_mut(id) else {
            return Ok(());
        };
        let started = std::mem::take(&mut node.mouse.started_inside[button.index()]);
        if started && inside {
            deliver(core, id, event, |w, ev, ctx| match w.pressable() {
                Some(p) => p.on_click(ev, button, ctx),
                None => Ok(EventOutcome::Ignore),
            })?;
            if button == Button::Left {
                double_click(core, id, event)?;
            }
        } else if started {
            deliver(core, id, event, |w, ev, ctx| match w.pressable() {
                Some(p) => p.on_release_outside(ev, button, ctx),
                None => Ok(EventOutcome::Ignore),
            })?;
        }
    }
    Ok(())
}

/// Fire a double click if the previous click is recent enough, otherwise
/// open the window for one.
fn double_click(core: &mut Core, id: NodeId, event: &mut MouseEvent) -> Result<()> {
    let now = core.ui.now;
    let window = core.config.double_click();
    let Some(node) = core.nodes.get_mut(id) else {
        return Ok(());
    };
    let timers = &mut node.timers;
    if timers.exists(&TimerKey::DoubleClick) && !timers.elapsed(&TimerKey::DoubleClick, now)? {
        timers.destroy(&TimerKey::DoubleClick)?;
        deliver(core, id, event, |w, ev, ctx| match w.pressable() {
            Some(p) => p.on_double_click(ev, ctx),
            None => Ok(EventOutcome::Ignore),
        })
    } else {
        timers.create(TimerKey::DoubleClick, now, window);
        Ok(())
    }
}

/// Held buttons, delivered over the node or while dragging from it.
fn press(core: &mut Core, id: NodeId, event: &mut MouseEvent) -> Result<()> {
    let inside = inside(core, id, event)?;
    for button in Button::ALL {
        if !event.pressed(button) {
            continue;
        }
        let Some(node) = core.nodes.get(id) else {
            return Ok(());
        };
        let started = node.mouse.started_inside[button.index()];
        if !inside && !started {
            continue;
        }
        deliver(core, id, event, |w, ev, ctx| match w.pressable() {
            Some(p) => p.on_mouse_press(ev, button, started, ctx),
            None => Ok(EventOutcome::Ignore),
        })?;
    }
    Ok(())
}

/// Wheel over the node.
fn wheel(core: &mut Core, id: NodeId, event: &mut MouseEvent) -> Result<()> {
    if !inside(core, id, event)? {
        return Ok(());
    }
    deliver(core, id, event, |w, ev, ctx| match w.scrollable() {
        Some(s) => s.on_mouse_wheel(ev, ctx),
        None => Ok(EventOutcome::Ignore),
    })
}

/// Built-in wheel scrolling for auto-scroll nodes, once the children had
/// their chance.
fn wheel_scroll(core: &mut Core, id: NodeId, event: &mut MouseEvent) -> Result<()> {
    if event.handled || id == core.root || !core.is_accessible(id) {
        return Ok(());
    }
    let node = core.node(id)?;
    let flags = node.auto_scroll;
    if flags.resize || !node.viewport.contains(event.position) {
        return Ok(());
    }
    let step = core.config.wheel_step as i32;
    let before = node.scroll;
    let mut scroll = before;
    if flags.vertical {
        scroll.y = scroll.y.saturating_add(event.wheel.y.saturating_mul(step));
    }
    if flags.horizontal {
        scroll.x = scroll.x.saturating_add(event.wheel.x.saturating_mul(step));
    }
    if scroll == before {
        return Ok(());
    }
    core.set_scroll(id, scroll)?;
    if core.node(id)?.scroll != before {
        trace!(?id, scroll = ?core.node(id)?.scroll, "wheel scroll");
        event.handled = true;
    }
    Ok(())
}

/// Resolve hover after the children and fire a change on a transition.
fn hover(core: &mut Core, id: NodeId, event: &MouseEvent) -> Result<()> {
    let inside = core.is_accessible(id) && inside(core, id, event)?;
    let now = core.ui.now;
    let delay = core.config.help_text_delay();
    let node = core.node_mut(id)?;
    if node.mouse.inside == inside {
        return Ok(());
    }
    node.mouse.inside = inside;
    if inside {
        if node.help.text.is_some() && node.help.popup.is_none() {
            node.timers.create(TimerKey::HelpText, now, delay);
        }
    } else {
        node.timers.cancel(&TimerKey::HelpText);
        core.close_help(id)?;
    }
    if core.contains(id) {
        core.notify(id, |w, ctx| match w.hoverable() {
            Some(h) => h.on_hover_changed(inside, ctx),
            None => Ok(()),
        })?;
    }
    Ok(())
}
