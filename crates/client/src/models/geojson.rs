//! Minimal GeoJSON feature types.
//!
//! Geometries are kept as raw JSON values; only the feature/collection
//! envelope is typed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl Feature {
    /// Wraps a geometry in a feature without properties.
    pub fn from_geometry(geometry: Value) -> Self {
        Self {
            kind: feature_type(),
            geometry: Some(geometry),
            properties: Map::new(),
        }
    }
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self {
            kind: collection_type(),
            features: Vec::new(),
        }
    }
}
