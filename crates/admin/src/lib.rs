//! View models for the Niord administration pages.
//!
//! Each controller owns its state (full list, filter, page window, edit
//! session, pending notifications) and talks to the server only through the
//! backend traits in [`backend`], which [`niord_client::NiordClient`]
//! implements. The presentation layer reads state, calls mutation methods and
//! drains [`Toasts`].

pub mod backend;
pub mod batch;
pub mod charts;
pub mod confirm;
pub mod controller;
pub mod domains;
pub mod edit;
pub mod entity;
pub mod error;
pub mod list_view;
pub mod notify;
pub mod poller;
pub mod templates;

pub use backend::{BatchBackend, CrudBackend, DomainBackend, TemplateBackend};
pub use batch::{
    BatchLogFiles, BatchMonitor, BatchStatusWatcher, ExecutionCategory, ExecutionRow,
    InstanceHeader, MonitorSnapshot, flatten_executions,
};
pub use charts::ChartsController;
pub use confirm::Confirm;
pub use controller::ListEditController;
pub use domains::{DomainsController, keycloak_console_url};
pub use edit::{EditMode, EditSession};
pub use entity::AdminEntity;
pub use error::{AdminError, Result};
pub use list_view::{ListView, PageState};
pub use notify::{Toast, ToastLevel, Toasts};
pub use poller::Poller;
pub use templates::{ResourcePath, TemplateDraft, TemplatesController};
