//! Home indicator visibility state.
//!
//! The hosting view controller owns one of these and consults
//! [`HomeIndicator::prefers_auto_hidden`] when the system asks whether the
//! indicator may be hidden.

use serde::{Deserialize, Serialize};

/// Version reported to scripts through `getPluginVersion`.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of `isHidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorStatus {
    pub hidden: bool,
}

/// Result of `getPluginVersion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginVersion {
    pub version: String,
}

/// Visibility flag owned by the view controller.
#[derive(Debug, Clone, Default)]
pub struct HomeIndicator {
    hidden: bool,
}

impl HomeIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the system to auto-hide the indicator.
    pub fn hide(&mut self) {
        log::debug!("Home indicator hidden");
        self.hidden = true;
    }

    /// Keep the indicator visible.
    pub fn show(&mut self) {
        log::debug!("Home indicator shown");
        self.hidden = false;
    }

    pub fn is_hidden(&self) -> IndicatorStatus {
        IndicatorStatus {
            hidden: self.hidden,
        }
    }

    /// Value for the controller's `prefersHomeIndicatorAutoHidden`.
    pub fn prefers_auto_hidden(&self) -> bool {
        self.hidden
    }

    pub fn plugin_version(&self) -> PluginVersion {
        PluginVersion {
            version: PLUGIN_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_visible() {
        let indicator = HomeIndicator::new();
        assert!(!indicator.is_hidden().hidden);
        assert!(!indicator.prefers_auto_hidden());
    }

    #[test]
    fn test_hide_show() {
        let mut indicator = HomeIndicator::new();
        indicator.hide();
        assert!(indicator.is_hidden().hidden);
        assert!(indicator.prefers_auto_hidden());
        indicator.show();
        assert!(!indicator.is_hidden().hidden);
    }

    #[test]
    fn test_controllers_are_independent() {
        let mut first = HomeIndicator::new();
        let second = HomeIndicator::new();
        first.hide();
        assert!(!second.is_hidden().hidden);
    }

    #[test]
    fn test_bridge_json() {
        let mut indicator = HomeIndicator::new();
        indicator.hide();
        let json = serde_json::to_string(&indicator.is_hidden()).unwrap();
        assert_eq!(json, r#"{"hidden":true}"#);

        let version = serde_json::to_value(indicator.plugin_version()).unwrap();
        assert_eq!(version["version"], PLUGIN_VERSION);
    }
}
