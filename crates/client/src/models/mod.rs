//! Data models for Niord REST API responses.
//!
//! Each resource has its own submodule; shared wrappers live in `common`.

mod batch;
mod categories;
mod charts;
mod common;
mod domains;
mod geojson;
mod templates;

pub use batch::{BatchExecution, BatchInstance, BatchStatus};
pub use categories::{Category, CategoryDesc};
pub use charts::Chart;
pub use common::PagedSearchResult;
pub use domains::Domain;
pub use geojson::{Feature, FeatureCollection};
pub use templates::{Template, TemplateDesc, TemplateSearchParams};
