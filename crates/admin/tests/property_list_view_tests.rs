//! Property tests for client-side filtering and pagination.
//!
//! # Invariants
//! - The visible page is the filtered list, in list order, sliced by page
//! - Changing the filter always returns to the first page

use niord_admin::{AdminEntity, ListView, PageState};
use niord_client::Chart;
use proptest::prelude::*;

fn charts(names: &[String]) -> Vec<Chart> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Chart {
            chart_number: Some(i.to_string()),
            name: Some(name.clone()),
            ..Default::default()
        })
        .collect()
}

proptest! {
    #[test]
    fn visible_page_is_slice_of_filtered_items(
        names in prop::collection::vec("[a-dA-D ]{0,6}", 0..40),
        filter in "[a-dA-D]{0,2}",
        size in 1usize..8,
        index in 0usize..8,
    ) {
        let items = charts(&names);
        let mut view = ListView::new(PageState::sized(size));
        view.set_items(items.clone());
        view.set_filter(filter.clone());
        view.set_page(index);

        let needle = filter.to_lowercase();
        let expected: Vec<Chart> = items
            .into_iter()
            .filter(|c| c.matches(&needle))
            .skip(index * size)
            .take(size)
            .collect();
        let visible: Vec<Chart> = view.visible().cloned().collect();

        prop_assert_eq!(visible, expected);
        prop_assert!(view.visible_len() <= size);
    }

    #[test]
    fn filter_matches_are_case_insensitive_substrings(
        names in prop::collection::vec("[a-dA-D]{1,6}", 1..20),
        filter in "[a-dA-D]{1,2}",
    ) {
        let mut view = ListView::new(PageState::unbounded());
        view.set_items(charts(&names));
        view.set_filter(filter.clone());

        let needle = filter.to_lowercase();
        for chart in view.visible() {
            let number = chart.chart_number.clone().unwrap_or_default();
            let name = chart.name.clone().unwrap_or_default().to_lowercase();
            prop_assert!(name.contains(&needle) || number.contains(&needle) || chart
                .horizontal_datum
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle)));
        }
    }

    #[test]
    fn set_filter_resets_page_index(
        names in prop::collection::vec("[a-d]{1,4}", 0..30),
        index in 0usize..10,
        filter in "[a-d]{0,2}",
    ) {
        let mut view = ListView::new(PageState::sized(3));
        view.set_items(charts(&names));
        view.set_page(index);
        view.set_filter(filter);

        prop_assert_eq!(view.page().index, 0);
        prop_assert!(view.page_count() >= 1);
    }
}
