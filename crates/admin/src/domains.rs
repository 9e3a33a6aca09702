//! Domain administration.

use std::sync::Arc;

use niord_client::Domain;
use tracing::{info, warn};

use crate::backend::DomainBackend;
use crate::controller::{ListEditController, save_error_toast};
use crate::error::Result;
use crate::list_view::PageState;

pub type DomainsController<B> = ListEditController<Domain, B>;

const KEYCLOAK_CLIENTS_PATH: &str = "admin/master/console/#/realms/niord/clients";

/// URL of the Keycloak admin console page listing the Niord clients.
pub fn keycloak_console_url(auth_server_url: &str) -> String {
    let mut url = auth_server_url.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(KEYCLOAK_CLIENTS_PATH);
    url
}

impl<B: DomainBackend> ListEditController<Domain, B> {
    /// Creates a domain controller; domains are not paged.
    pub fn domains(backend: Arc<B>) -> Self {
        Self::new(backend, PageState::unbounded())
    }

    pub fn keycloak_url(&self) -> String {
        keycloak_console_url(&self.backend.auth_server_url())
    }

    /// Creates the Keycloak client of a loaded domain, then reloads.
    pub async fn create_in_keycloak(&mut self, client_id: &str) -> Result<()> {
        let domain = self.find(&client_id.to_string())?.clone();
        match self.backend.create_in_keycloak(&domain).await {
            Ok(()) => {
                info!(client_id, "Created domain in Keycloak");
                self.load().await
            }
            Err(e) => {
                warn!(client_id, error = %e, "Failed to create domain in Keycloak");
                self.toasts.push(save_error_toast::<Domain>());
                Err(e.into())
            }
        }
    }
}
