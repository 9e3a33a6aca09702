//! Entities managed by the generic list-edit controller.
//!
//! Invariants:
//! - An entity without an identifier has never been persisted.
//! - Search fields are compared case-insensitively by substring.

use std::fmt;

use niord_client::{Chart, Domain};

/// An entity that can be listed, filtered, edited and saved.
pub trait AdminEntity: Clone + Default + Send + Sync + 'static {
    type Id: Clone + PartialEq + fmt::Display + Send + Sync + 'static;

    /// Lower-case entity name used in notifications ("Error saving chart").
    const LABEL: &'static str;

    /// Title of the delete confirmation dialog.
    const DELETE_TITLE: &'static str;

    fn id(&self) -> Option<Self::Id>;

    fn clear_id(&mut self);

    /// Values matched by the list filter; absent values are skipped.
    fn search_fields(&self) -> Vec<String>;

    /// Body of the delete confirmation dialog.
    fn delete_message(id: &Self::Id) -> String;

    /// True if any search field contains `needle`, which must already be lower case.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

impl AdminEntity for Chart {
    type Id = String;

    const LABEL: &'static str = "chart";
    const DELETE_TITLE: &'static str = "Delete Chart?";

    fn id(&self) -> Option<String> {
        self.chart_number.clone()
    }

    fn clear_id(&mut self) {
        self.chart_number = None;
    }

    fn search_fields(&self) -> Vec<String> {
        [
            self.chart_number.clone(),
            self.international_number.map(|n| n.to_string()),
            self.horizontal_datum.clone(),
            self.name.clone(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn delete_message(id: &String) -> String {
        format!("Delete chart number '{}'?", id)
    }
}

impl AdminEntity for Domain {
    type Id = String;

    const LABEL: &'static str = "domain";
    const DELETE_TITLE: &'static str = "Delete domain?";

    fn id(&self) -> Option<String> {
        self.client_id.clone()
    }

    fn clear_id(&mut self) {
        self.client_id = None;
    }

    fn search_fields(&self) -> Vec<String> {
        [self.client_id.clone(), self.name.clone()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn delete_message(id: &String) -> String {
        format!("Delete domain ID '{}'?", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(number: &str, name: &str) -> Chart {
        Chart {
            chart_number: Some(number.to_string()),
            international_number: Some(1300),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_chart_matches_any_field() {
        let c = chart("101", "North Sea");
        assert!(c.matches("nor"));
        assert!(c.matches("101"));
        assert!(c.matches("1300"));
        assert!(c.matches("wgs"));
        assert!(!c.matches("baltic"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(Chart::default().matches(""));
    }

    #[test]
    fn test_domain_matches_client_id_or_name() {
        let d = Domain {
            client_id: Some("niord-client-nw".to_string()),
            name: Some("NW".to_string()),
            time_zone: Some("Europe/Copenhagen".to_string()),
            ..Default::default()
        };
        assert!(d.matches("client-nw"));
        assert!(d.matches("nw"));
        assert!(!d.matches("copenhagen"));
    }

    #[test]
    fn test_clear_id() {
        let mut c = chart("101", "North Sea");
        c.clear_id();
        assert_eq!(AdminEntity::id(&c), None);
    }

    #[test]
    fn test_delete_messages() {
        assert_eq!(Chart::delete_message(&"101".to_string()), "Delete chart number '101'?");
        assert_eq!(
            Domain::delete_message(&"niord-client-nw".to_string()),
            "Delete domain ID 'niord-client-nw'?"
        );
    }
}
