//! Keyboard shortcuts owned by nodes.
//!
//! Each shortcut runs a small state machine, evaluated once per frame: it
//! fires on the edge where its whole chord becomes held, optionally repeats
//! while held, and returns to idle as soon as any key is released.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::{
    NodeId, ShortcutId,
    core::{Core, timer::TimerKey},
    error::Result,
    event::key::{Key, KeyCode, Mods},
    widget::EventOutcome,
};

/// When a shortcut is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutScope {
    /// Only while the owner holds keyboard focus.
    Selected,
    /// Whenever the owner is accessible.
    Global,
}

/// Shortcut evaluation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortcutState {
    /// Waiting for the chord.
    #[default]
    Idle,
    /// The chord is held and has fired.
    Held,
}

/// A set of keys that must be down together, with an exact modifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    /// Required modifiers.
    pub mods: Mods,
    /// Required keys.
    pub keys: Vec<KeyCode>,
}

impl Chord {
    /// A chord of several keys.
    pub fn new(mods: Mods, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            mods,
            keys: keys.into_iter().collect(),
        }
    }

    /// Is the chord held in the given key snapshot?
    pub fn is_held(&self, keys: &BTreeSet<KeyCode>, mods: Mods) -> bool {
        !self.keys.is_empty() && mods == self.mods && self.keys.iter().all(|k| keys.contains(k))
    }
}

impl From<Key> for Chord {
    fn from(key: Key) -> Self {
        Self {
            mods: key.mods,
            keys: vec![key.key],
        }
    }
}

impl From<KeyCode> for Chord {
    fn from(key: KeyCode) -> Self {
        Key::from(key).into()
    }
}

impl From<char> for Chord {
    fn from(c: char) -> Self {
        Key::from(c).into()
    }
}

/// A registered shortcut.
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Node whose `on_shortcut` hook receives the shortcut.
    pub(crate) owner: NodeId,
    /// Keys to hold.
    pub(crate) chord: Chord,
    /// When the shortcut is live.
    pub(crate) scope: ShortcutScope,
    /// Fire again while held.
    pub(crate) repeat: bool,
    /// Evaluation state.
    pub(crate) state: ShortcutState,
    /// Marked for removal on the next update.
    pub(crate) removed: bool,
}

impl Shortcut {
    /// Owning node.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Keys to hold.
    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    /// When the shortcut is live.
    pub fn scope(&self) -> ShortcutScope {
        self.scope
    }

    /// Current state.
    pub fn state(&self) -> ShortcutState {
        self.state
    }

    /// Is the shortcut waiting to be pruned?
    pub fn is_removed(&self) -> bool {
        self.removed
    }
}

impl Core {
    /// Register a shortcut owned by `owner`.
    pub fn add_shortcut(
        &mut self,
        owner: impl Into<NodeId>,
        chord: impl Into<Chord>,
        scope: ShortcutScope,
        repeat: bool,
    ) -> Result<ShortcutId> {
        let owner = owner.into();
        self.node(owner)?;
        let chord = chord.into();
        debug!(?owner, ?chord, ?scope, repeat, "shortcut added");
        Ok(self.shortcuts.insert(Shortcut {
            owner,
            chord,
            scope,
            repeat,
            state: ShortcutState::Idle,
            removed: false,
        }))
    }

    /// Mark a shortcut for removal. It stops firing at once and is pruned on
    /// the next update.
    pub fn remove_shortcut(&mut self, id: ShortcutId) {
        if let Some(shortcut) = self.shortcuts.get_mut(id) {
            shortcut.removed = true;
        }
    }

    /// Look up a shortcut.
    pub fn shortcut(&self, id: ShortcutId) -> Option<&Shortcut> {
        self.shortcuts.get(id)
    }

    /// Live shortcuts matching a filter.
    fn shortcut_ids(&self, filter: impl Fn(&Shortcut) -> bool) -> Vec<ShortcutId> {
        self.shortcuts
            .iter()
            .filter(|(_, s)| !s.removed && filter(s))
            .map(|(id, _)| id)
            .collect()
    }

    /// Evaluate global shortcuts whose owners are accessible.
    pub(crate) fn evaluate_global_shortcuts(&mut self) -> Result<()> {
        for id in self.shortcut_ids(|s| s.scope == ShortcutScope::Global) {
            let owner = self.shortcuts[id].owner;
            if self.is_accessible(owner) {
                self.evaluate_shortcut(id)?;
            } else if self.contains(owner) {
                self.reset_shortcut(id);
            }
        }
        Ok(())
    }

    /// Evaluate the focus-scoped shortcuts owned by `owner`.
    pub(crate) fn evaluate_selected_shortcuts(&mut self, owner: NodeId) -> Result<()> {
        for id in self.shortcut_ids(|s| s.owner == owner && s.scope == ShortcutScope::Selected) {
            self.evaluate_shortcut(id)?;
        }
        Ok(())
    }

    /// Return every shortcut owned by `owner` to idle and stop its repeat timer.
    pub(crate) fn reset_owned_shortcuts(&mut self, owner: NodeId) {
        for id in self.shortcut_ids(|s| s.owner == owner) {
            self.reset_shortcut(id);
        }
    }

    /// Return one shortcut to idle.
    fn reset_shortcut(&mut self, id: ShortcutId) {
        let Some(shortcut) = self.shortcuts.get_mut(id) else {
            return;
        };
        shortcut.state = ShortcutState::Idle;
        let owner = shortcut.owner;
        if let Some(node) = self.nodes.get_mut(owner) {
            node.timers.cancel(&TimerKey::KeyRepeat(id));
        }
    }

    /// Advance one shortcut's state machine against the held-key snapshot.
    pub(crate) fn evaluate_shortcut(&mut self, id: ShortcutId) -> Result<()> {
        let Some(shortcut) = self.shortcuts.get(id) else {
            return Ok(());
        };
        if shortcut.removed {
            return Ok(());
        }
        let owner = shortcut.owner;
        if !self.contains(owner) {
            warn!(?id, ?owner, "shortcut owner vanished");
            self.remove_shortcut(id);
            return Ok(());
        }

        let held = shortcut.chord.is_held(&self.ui.keys, self.ui.mods);
        let (state, repeat) = (shortcut.state, shortcut.repeat);
        let now = self.ui.now;
        let delay = self.config.key_repeat_delay();
        let interval = self.config.key_repeat_interval();
        let key = TimerKey::KeyRepeat(id);
        match (state, held) {
            (ShortcutState::Idle, true) => {
                self.shortcuts[id].state = ShortcutState::Held;
                if repeat {
                    self.timers_mut(owner)?.create(key, now, delay);
                }
                self.fire_shortcut(id, owner)
            }
            (ShortcutState::Held, true) if repeat => {
                let timers = self.timers_mut(owner)?;
                if !timers.exists(&key) {
                    timers.create(key, now, delay);
                    return Ok(());
                }
                if timers.elapsed(&key, now)? {
                    timers.create(key, now, interval);
                    return self.fire_shortcut(id, owner);
                }
                Ok(())
            }
            (ShortcutState::Held, false) => {
                self.reset_shortcut(id);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Deliver a shortcut to its owner.
    fn fire_shortcut(&mut self, id: ShortcutId, owner: NodeId) -> Result<()> {
        debug!(?id, ?owner, "shortcut fired");
        let outcome = self.notify(owner, |w, ctx| w.on_shortcut(id, ctx))?;
        if outcome == Some(EventOutcome::Handle) && self.contains(owner) {
            self.redraw(owner)?;
        }
        Ok(())
    }

    /// Drop shortcuts marked for removal.
    pub(crate) fn prune_shortcuts(&mut self) {
        self.shortcuts.retain(|_, s| !s.removed);
    }
}
