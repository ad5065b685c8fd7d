//! Snapshot types returned by the backend API.

use serde::{Deserialize, Deserializer, Serialize};

/// A cluster with its devices and the connections between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    pub name: String,
    #[serde(default)]
    pub devices: Vec<DeviceSnapshot>,
    #[serde(default)]
    pub connections: Vec<ConnectionSnapshot>,
}

/// A device rendered as one graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    /// Device id; integer ids from the backend are kept as their decimal string
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub device_type: DeviceTypeSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTypeSnapshot {
    pub category: String,
}

/// A connection between two devices, rendered as one graph edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSnapshot {
    pub source_device: DeviceSnapshot,
    pub target_device: DeviceSnapshot,
    /// Taken from the connection metadata; `null` or missing reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

impl ConnectionSnapshot {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// System health reported by `/api/v1/system/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatusSnapshot {
    pub db_health: f64,
    pub api_health: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netbox_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netbox_health: Option<f64>,
}

impl SystemStatusSnapshot {
    /// The NetBox status, treating `null` and the empty string as absent.
    pub fn netbox_status(&self) -> Option<&str> {
        self.netbox_status.as_deref().filter(|s| !s.is_empty())
    }
}

/// Response envelope used by the backend's v1 blueprint.
#[derive(Debug, Deserialize)]
pub(crate) struct ClustersEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<Vec<ClusterSnapshot>>,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Unsigned(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Unsigned(n) => n.to_string(),
    })
}
