//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, the normalized base URL
//! and the request credentials, and performs exactly one logical call.

mod batch;
mod categories;
mod charts;
mod domains;
pub mod request;
mod templates;
mod tickets;
pub mod url_encoding;

pub use batch::{
    ExecutionAction, batch_download_url, control_execution, get_batch_status, get_log_file,
    list_batch_instances, list_log_files,
};
pub use categories::get_category;
pub use charts::{create_chart, delete_chart, get_chart, list_charts, update_chart};
pub use domains::{
    create_domain, create_domain_in_keycloak, delete_domain, list_domains, update_domain,
};
pub use request::{RequestAuth, send_request_with_retry};
pub use templates::{
    create_template, delete_template, execute_template, get_template, search_templates,
    templates_export_url, update_template, upload_templates,
};
pub use tickets::get_ticket;
pub use url_encoding::encode_path_segment;
