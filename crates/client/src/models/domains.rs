//! Domain models for the `/rest/domains` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Niord domain, backed by a Keycloak client of the same id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Whether the Keycloak client exists; only reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_keycloak: Option<bool>,
    #[serde(default)]
    pub areas: Vec<Value>,
    #[serde(default)]
    pub categories: Vec<Value>,
    #[serde(default)]
    pub message_series: Vec<Value>,
}
