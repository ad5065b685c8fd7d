//! Named bindings between health values and indicator widgets.

use serde::{Deserialize, Serialize};

/// Widget ids the status poller writes to.
///
/// Each indicator is bound explicitly by id; nothing is selected by its
/// position in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorBindings {
    /// Progress bar showing database health
    pub db_health_bar: String,
    /// Progress bar showing API health
    pub api_health_bar: String,
    /// Panel shown only while a NetBox status is reported
    pub netbox_container: String,
    pub netbox_badge: String,
    pub netbox_icon: String,
    pub netbox_text: String,
    pub netbox_health_bar: String,
}

impl Default for IndicatorBindings {
    fn default() -> Self {
        Self {
            db_health_bar: "db-health-bar".to_string(),
            api_health_bar: "api-health-bar".to_string(),
            netbox_container: "netbox-status-container".to_string(),
            netbox_badge: "netbox-status-badge".to_string(),
            netbox_icon: "netbox-status-icon".to_string(),
            netbox_text: "netbox-status-text".to_string(),
            netbox_health_bar: "netbox-health-bar".to_string(),
        }
    }
}

impl IndicatorBindings {
    /// All bindings as `(field, widget id)` pairs.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("db_health_bar", self.db_health_bar.as_str()),
            ("api_health_bar", self.api_health_bar.as_str()),
            ("netbox_container", self.netbox_container.as_str()),
            ("netbox_badge", self.netbox_badge.as_str()),
            ("netbox_icon", self.netbox_icon.as_str()),
            ("netbox_text", self.netbox_text.as_str()),
            ("netbox_health_bar", self.netbox_health_bar.as_str()),
        ]
    }

    /// First binding that is empty or reuses another binding's id.
    pub fn find_invalid(&self) -> Option<(&'static str, String)> {
        let entries = self.entries();
        for (i, &(field, id)) in entries.iter().enumerate() {
            if id.trim().is_empty() {
                return Some((field, "widget id cannot be empty".to_string()));
            }
            if let Some(&(other, _)) = entries[..i].iter().find(|&&(_, prev)| prev == id) {
                return Some((field, format!("widget id '{}' is already bound to {}", id, other)));
            }
        }
        None
    }
}
