//! Chart administration.
//!
//! While editing, the chart geometry is exposed as a GeoJSON feature
//! collection for map editors. One feature carries the geometry; an empty
//! collection means the chart has no geometry.

use std::sync::Arc;

use niord_client::{Chart, Feature, FeatureCollection};
use niord_config::ViewConfig;

use crate::backend::CrudBackend;
use crate::controller::ListEditController;
use crate::error::{AdminError, Result};
use crate::list_view::PageState;

pub type ChartsController<B> = ListEditController<Chart, B>;

impl<B: CrudBackend<Chart>> ListEditController<Chart, B> {
    /// Creates a chart controller paged per the view configuration.
    pub fn charts(backend: Arc<B>, view: &ViewConfig) -> Self {
        Self::new(backend, PageState::sized(view.chart_page_size))
    }

    /// The draft geometry as a feature collection.
    pub fn feature_collection(&self) -> Result<FeatureCollection> {
        let draft = self
            .session
            .as_ref()
            .ok_or(AdminError::NoEditSession)?
            .draft();
        Ok(geometry_to_features(draft))
    }

    /// Writes an edited feature collection back into the draft geometry.
    pub fn set_features(&mut self, features: FeatureCollection) -> Result<()> {
        let draft = self.draft_mut().ok_or(AdminError::NoEditSession)?;
        draft.geometry = features_to_geometry(features);
        Ok(())
    }
}

fn geometry_to_features(chart: &Chart) -> FeatureCollection {
    let mut collection = FeatureCollection::default();
    if let Some(geometry) = &chart.geometry {
        collection.features.push(Feature::from_geometry(geometry.clone()));
    }
    collection
}

fn features_to_geometry(features: FeatureCollection) -> Option<serde_json::Value> {
    features.features.into_iter().next().and_then(|f| f.geometry)
}
