//! Sea chart models for the `/rest/charts` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A sea chart.
///
/// The chart number identifies the chart on the server; a chart without one
/// has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_number: Option<String>,
    #[serde(default)]
    pub international_number: Option<i32>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scale: Option<i32>,
    #[serde(default)]
    pub horizontal_datum: Option<String>,
    /// GeoJSON geometry of the chart extent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
}

fn default_active() -> bool {
    true
}

impl Default for Chart {
    /// A new, unsaved chart using the WGS84 datum.
    fn default() -> Self {
        Self {
            chart_number: None,
            international_number: None,
            active: true,
            name: None,
            scale: None,
            horizontal_datum: Some("WGS84".to_string()),
            geometry: None,
        }
    }
}
