//! NetBox status variants and their CSS classes.

use serde::{Deserialize, Serialize};

/// Visual state of the NetBox panel.
///
/// Selected purely from the latest status string; there is no memory of
/// previous states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVariant {
    Success,
    Info,
    Warning,
}

impl StatusVariant {
    /// `connected` → success, `syncing` → info, anything else → warning.
    pub fn from_netbox_status(status: &str) -> Self {
        match status {
            "connected" => StatusVariant::Success,
            "syncing" => StatusVariant::Info,
            _ => StatusVariant::Warning,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusVariant::Success => "success",
            StatusVariant::Info => "info",
            StatusVariant::Warning => "warning",
        }
    }

    /// Font Awesome icon name.
    pub fn icon_name(self) -> &'static str {
        match self {
            StatusVariant::Success => "check-circle",
            StatusVariant::Info => "sync",
            StatusVariant::Warning => "exclamation-circle",
        }
    }

    pub fn badge_class(self) -> String {
        format!("status-badge status-badge-{}", self.as_str())
    }

    pub fn icon_class(self) -> String {
        format!("fas fa-{} mr-1", self.icon_name())
    }

    pub fn bar_class(self) -> String {
        format!("status-progress-bar status-progress-{}", self.as_str())
    }
}

/// Uppercase the first character, leave the rest as is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// CSS width for a health value: `42` → `"42%"`, `33.5` → `"33.5%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}
