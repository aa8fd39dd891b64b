//! The window-level entry point.

use std::time::Instant;

use tracing::debug;

use crate::{
    NodeId,
    config::Config,
    core::{Core, focus::FocusManager, mouse::MouseManager},
    error::Result,
    event::{
        SizeEvent, TextEvent,
        key::Key,
        mouse::{MouseEvent, MouseEventKind},
    },
    geom::Expanse,
    render::{self, Renderer},
    widget::EventOutcome,
};

/// A window's widget tree plus the collaborator that draws it.
///
/// The platform layer forwards raw input into the `process_*`, `text_input`,
/// `key_*` and `size_changed` entry points, and calls [`Ui::update`] and
/// [`Ui::render`] once per frame. Input dispatch for a frame completes
/// before the update pass runs.
pub struct Ui {
    /// The node arena.
    pub core: Core,
    /// Drawing collaborator.
    renderer: Box<dyn Renderer>,
}

impl Ui {
    /// Create a UI with the default configuration.
    pub fn new(size: Expanse, renderer: impl Renderer + 'static) -> Result<Self> {
        Self::with_config(size, Config::default(), renderer)
    }

    /// Create a UI with an explicit configuration.
    pub fn with_config(size: Expanse, config: Config, renderer: impl Renderer + 'static) -> Result<Self> {
        let mut core = Core::new(config);
        core.resize_root(size)?;
        Ok(Self {
            core,
            renderer: Box::new(renderer),
        })
    }

    /// The root container.
    pub fn root(&self) -> NodeId {
        self.core.root()
    }

    /// Dispatch a pointer event from the root.
    fn process_mouse(&mut self, kind: MouseEventKind, event: &mut MouseEvent) -> Result<()> {
        self.core.ui.pointer = event.position;
        let root = self.core.root();
        MouseManager::perform(&mut self.core, root, kind, event, true)
    }

    /// The pointer moved.
    pub fn process_mouse_moving(&mut self, event: &mut MouseEvent) -> Result<()> {
        self.process_mouse(MouseEventKind::Moving, event)
    }

    /// A button went down.
    pub fn process_mouse_down(&mut self, event: &mut MouseEvent) -> Result<()> {
        self.process_mouse(MouseEventKind::Down, event)
    }

    /// A button came up.
    pub fn process_mouse_up(&mut self, event: &mut MouseEvent) -> Result<()> {
        self.process_mouse(MouseEventKind::Up, event)
    }

    /// Buttons are being held.
    pub fn process_mouse_press(&mut self, event: &mut MouseEvent) -> Result<()> {
        self.process_mouse(MouseEventKind::Press, event)
    }

    /// The wheel turned.
    pub fn process_mouse_wheel(&mut self, event: &mut MouseEvent) -> Result<()> {
        self.process_mouse(MouseEventKind::Wheel, event)
    }

    /// The selected node, if it can take keyboard input right now.
    fn keyboard_target(&self) -> Option<NodeId> {
        self.core
            .selected()
            .filter(|id| self.core.is_accessible(*id))
    }

    /// Text arrived from the input method. It goes to the selected widget.
    pub fn text_input(&mut self, event: &mut TextEvent) -> Result<()> {
        let Some(target) = self.keyboard_target() else {
            return Ok(());
        };
        let text = event.text.clone();
        let outcome = self.core.notify(target, |w, ctx| match w.text_editable() {
            Some(t) => t.on_text_input(&text, ctx),
            None => Ok(EventOutcome::Ignore),
        })?;
        self.finish_key_outcome(target, outcome, &mut event.handled)
    }

    /// A key went down. The held-key snapshot is updated for shortcut
    /// evaluation and the key is offered to the selected widget.
    pub fn key_down(&mut self, key: Key) -> Result<bool> {
        self.core.ui.keys.insert(key.key);
        self.core.ui.mods = key.mods;
        let Some(target) = self.keyboard_target() else {
            return Ok(false);
        };
        let outcome = self.core.notify(target, |w, ctx| match w.text_editable() {
            Some(t) => t.on_key_down(key, ctx),
            None => Ok(EventOutcome::Ignore),
        })?;
        let mut handled = false;
        self.finish_key_outcome(target, outcome, &mut handled)?;
        Ok(handled)
    }

    /// A key came up.
    pub fn key_up(&mut self, key: Key) -> Result<()> {
        self.core.ui.keys.remove(&key.key);
        self.core.ui.mods = key.mods;
        Ok(())
    }

    /// Apply a keyboard handler outcome.
    fn finish_key_outcome(
        &mut self,
        target: NodeId,
        outcome: Option<EventOutcome>,
        handled: &mut bool,
    ) -> Result<()> {
        match outcome {
            Some(EventOutcome::Handle) => {
                *handled = true;
                if self.core.contains(target) {
                    self.core.redraw(target)?;
                }
            }
            Some(EventOutcome::Consume) => *handled = true,
            _ => {}
        }
        Ok(())
    }

    /// The window's client area changed size.
    pub fn size_changed(&mut self, event: SizeEvent) -> Result<()> {
        debug!(size = ?event.size, "window resized");
        self.core.resize_root(event.size)
    }

    /// Run the per-frame update pass.
    pub fn update(&mut self, now: Instant) -> Result<()> {
        self.core.update(now)
    }

    /// Present the current frame.
    pub fn render(&mut self) -> Result<()> {
        render::render(&mut self.core, self.renderer.as_mut())
    }

    /// Update then render.
    pub fn frame(&mut self, now: Instant) -> Result<()> {
        self.update(now)?;
        self.render()
    }

    /// Dispose every node under the root, ignoring vetoes, and reset focus,
    /// the active stack and the input snapshot.
    pub fn shutdown(&mut self) -> Result<()> {
        let root = self.core.root();
        for child in self.core.children(root)? {
            if self.core.contains(child) {
                self.core.dispose_tree(child)?;
            }
        }
        self.core.ui.selected = None;
        self.core.ui.active.clear();
        self.core.ui.keys.clear();
        self.core.ui.pending_selection = None;
        self.core.prune_shortcuts();
        for id in self.core.released.drain(..) {
            self.renderer.release(id);
        }
        debug!("ui shut down");
        Ok(())
    }
}
