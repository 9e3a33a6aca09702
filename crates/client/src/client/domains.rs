//! Domain API methods for [`NiordClient`].

use crate::client::NiordClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Domain;

impl NiordClient {
    /// List all domains.
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        endpoints::list_domains(&self.http, &self.base_url, &self.auth, self.max_retries).await
    }

    /// Create a domain.
    pub async fn create_domain(&self, domain: &Domain) -> Result<Domain> {
        endpoints::create_domain(&self.http, &self.base_url, &self.auth, domain, self.max_retries)
            .await
    }

    /// Update the domain with the given client id.
    pub async fn update_domain(&self, client_id: &str, domain: &Domain) -> Result<Domain> {
        endpoints::update_domain(
            &self.http,
            &self.base_url,
            &self.auth,
            client_id,
            domain,
            self.max_retries,
        )
        .await
    }

    /// Delete a domain.
    pub async fn delete_domain(&self, client_id: &str) -> Result<()> {
        endpoints::delete_domain(
            &self.http,
            &self.base_url,
            &self.auth,
            client_id,
            self.max_retries,
        )
        .await
    }

    /// Create the Keycloak client for a domain.
    pub async fn create_domain_in_keycloak(&self, domain: &Domain) -> Result<()> {
        endpoints::create_domain_in_keycloak(
            &self.http,
            &self.base_url,
            &self.auth,
            domain,
            self.max_retries,
        )
        .await
    }
}
