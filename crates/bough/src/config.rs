//! Timing constants and popup geometry, loadable from JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{error::Result, geom::Point};

/// Runtime configuration shared by every node in a [`Ui`](crate::Ui).
///
/// All durations are polled once per frame, so their effective resolution is
/// one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum gap between two clicks that still counts as a double click.
    pub double_click_ms: u64,
    /// Hover time before a node's help text pops up.
    pub help_text_delay_ms: u64,
    /// Hold time before a repeating shortcut fires a second time.
    pub key_repeat_delay_ms: u64,
    /// Interval between repeats once a shortcut is repeating.
    pub key_repeat_interval_ms: u64,
    /// Pixels scrolled per wheel notch.
    pub wheel_step: u32,
    /// Offset of a tooltip from the pointer.
    pub tooltip_offset: (i32, i32),
    /// Z delta given to tooltip popups.
    pub tooltip_z: i32,
    /// Height of a single context menu row.
    pub menu_item_height: u32,
    /// Width of context menu popups.
    pub menu_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            double_click_ms: 400,
            help_text_delay_ms: 600,
            key_repeat_delay_ms: 500,
            key_repeat_interval_ms: 50,
            wheel_step: 20,
            tooltip_offset: (12, 18),
            tooltip_z: 10_000,
            menu_item_height: 20,
            menu_width: 160,
        }
    }
}

impl Config {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Double-click window.
    pub fn double_click(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    /// Help text hover delay.
    pub fn help_text_delay(&self) -> Duration {
        Duration::from_millis(self.help_text_delay_ms)
    }

    /// Initial key repeat delay.
    pub fn key_repeat_delay(&self) -> Duration {
        Duration::from_millis(self.key_repeat_delay_ms)
    }

    /// Key repeat interval.
    pub fn key_repeat_interval(&self) -> Duration {
        Duration::from_millis(self.key_repeat_interval_ms)
    }

    /// Tooltip offset as a point.
    pub fn tooltip_offset(&self) -> Point {
        self.tooltip_offset.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn partial_document_keeps_defaults() -> Result<()> {
        let config = Config::from_json(r#"{ "wheel_step": 7, "tooltip_offset": [1, 2] }"#)?;
        assert_eq!(config.wheel_step, 7);
        assert_eq!(config.tooltip_offset(), Point::new(1, 2));
        assert_eq!(config.double_click_ms, Config::default().double_click_ms);
        Ok(())
    }

    #[test]
    fn malformed_document() {
        assert!(matches!(
            Config::from_json("{ wheel_step: }"),
            Err(Error::Config(_))
        ));
    }
}
