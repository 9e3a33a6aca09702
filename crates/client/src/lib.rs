//! Niord REST API client.
//!
//! This crate provides typed models and an async client for the
//! administrative endpoints of a Niord server: charts, domains, message
//! templates, categories, download tickets and batch jobs.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::NiordClient;
pub use client::builder::NiordClientBuilder;
pub use endpoints::{ExecutionAction, RequestAuth};
pub use error::{ClientError, Result};
pub use models::{
    BatchExecution, BatchInstance, BatchStatus, Category, CategoryDesc, Chart, Domain, Feature,
    FeatureCollection, PagedSearchResult, Template, TemplateDesc, TemplateSearchParams,
};
