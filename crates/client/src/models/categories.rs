//! Category models for the `/rest/categories` endpoints.

use serde::{Deserialize, Serialize};

/// Localized category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDesc {
    pub lang: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A message category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub descs: Vec<CategoryDesc>,
}

impl Category {
    /// The description for the given language, if any.
    pub fn desc(&self, lang: &str) -> Option<&CategoryDesc> {
        self.descs.iter().find(|d| d.lang == lang)
    }
}
