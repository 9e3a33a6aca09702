//! Message template models for the `/rest/templates` endpoints.

use serde::{Deserialize, Serialize};

use super::categories::Category;
use super::domains::Domain;

/// Localized template name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDesc {
    pub lang: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl TemplateDesc {
    /// A description for `lang` with an empty name.
    pub fn empty(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            name: Some(String::new()),
        }
    }
}

/// A message template executed server-side against a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub descs: Vec<TemplateDesc>,
    /// Ordered script resource paths run by the template
    #[serde(default)]
    pub script_resource_paths: Vec<String>,
}

impl Default for Template {
    /// A new template with a single empty resource path.
    fn default() -> Self {
        Self {
            id: None,
            category: None,
            domains: Vec::new(),
            descs: Vec::new(),
            script_resource_paths: vec![String::new()],
        }
    }
}

impl Template {
    /// The description for the given language, if any.
    pub fn desc(&self, lang: &str) -> Option<&TemplateDesc> {
        self.descs.iter().find(|d| d.lang == lang)
    }

    /// Mutable description for the given language, if any.
    pub fn desc_mut(&mut self, lang: &str) -> Option<&mut TemplateDesc> {
        self.descs.iter_mut().find(|d| d.lang == lang)
    }
}

/// Criteria for the server-side template search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSearchParams {
    /// Case-insensitive name substring
    pub name: String,
    pub category: Option<i64>,
    /// Domain client id
    pub domain: Option<String>,
}
