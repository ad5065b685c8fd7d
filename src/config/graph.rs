//! Graph view configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Container id the view is mounted on
    pub container: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            container: "cy".to_string(),
        }
    }
}
