use std::{
    collections::HashMap,
    fmt,
    time::{Duration, Instant},
};

use crate::{
    ShortcutId,
    error::{Error, Result},
};

/// Names for per-node countdowns. Timers are only checked when a frame runs,
/// so their resolution is one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Caret blink for text widgets.
    Caret,
    /// Window for detecting a second click.
    DoubleClick,
    /// Hover delay before help text appears.
    HelpText,
    /// Auto-repeat for a held shortcut.
    KeyRepeat(ShortcutId),
    /// Widget-defined timer.
    Named(String),
}

impl fmt::Display for TimerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caret => write!(f, "caret"),
            Self::DoubleClick => write!(f, "double_click"),
            Self::HelpText => write!(f, "help_text"),
            Self::KeyRepeat(id) => write!(f, "key_repeat({id:?})"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A running countdown.
#[derive(Debug, Clone, Copy)]
struct Timer {
    /// When the countdown started.
    started: Instant,
    /// Countdown length.
    duration: Duration,
}

/// A node's set of named countdowns.
#[derive(Debug, Default, Clone)]
pub struct Timers {
    /// Running timers by key.
    timers: HashMap<TimerKey, Timer>,
}

impl Timers {
    /// Start a countdown, replacing any existing timer with the same key.
    pub fn create(&mut self, key: TimerKey, now: Instant, duration: Duration) {
        self.timers.insert(
            key,
            Timer {
                started: now,
                duration,
            },
        );
    }

    /// Is a timer with this key running?
    pub fn exists(&self, key: &TimerKey) -> bool {
        self.timers.contains_key(key)
    }

    /// Has the countdown run out? Errors if the timer does not exist.
    pub fn elapsed(&self, key: &TimerKey, now: Instant) -> Result<bool> {
        let timer = self.get(key)?;
        Ok(now.saturating_duration_since(timer.started) >= timer.duration)
    }

    /// Time left before the countdown runs out.
    pub fn remaining(&self, key: &TimerKey, now: Instant) -> Result<Duration> {
        let timer = self.get(key)?;
        Ok(timer
            .duration
            .saturating_sub(now.saturating_duration_since(timer.started)))
    }

    /// Restart a countdown from `now`, keeping its duration.
    pub fn reset(&mut self, key: &TimerKey, now: Instant) -> Result<()> {
        let timer = self
            .timers
            .get_mut(key)
            .ok_or_else(|| Error::TimerNotFound(key.to_string()))?;
        timer.started = now;
        Ok(())
    }

    /// Remove a timer. Errors if it does not exist; callers check first.
    pub fn destroy(&mut self, key: &TimerKey) -> Result<()> {
        self.timers
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| Error::TimerNotFound(key.to_string()))
    }

    /// Remove a timer if present, returning whether it existed.
    pub fn cancel(&mut self, key: &TimerKey) -> bool {
        self.timers.remove(key).is_some()
    }

    /// Number of running timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// True if no timers are running.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Look up a timer.
    fn get(&self, key: &TimerKey) -> Result<&Timer> {
        self.timers
            .get(key)
            .ok_or_else(|| Error::TimerNotFound(key.to_string()))
    }
}
