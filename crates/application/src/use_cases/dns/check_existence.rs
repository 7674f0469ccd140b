use crate::ports::QueryTransport;
use dnscrawler_domain::endpoints::RECURSIVE_RESOLVER;
use dnscrawler_domain::{fqdn, RecordType};
use std::sync::Arc;
use tracing::{debug, warn};

/// Registration probe: only an NXDOMAIN answer means the name is free.
pub struct CheckExistenceUseCase {
    transport: Arc<dyn QueryTransport>,
}

impl CheckExistenceUseCase {
    pub fn new(transport: Arc<dyn QueryTransport>) -> Self {
        Self { transport }
    }

    /// Transport failures count as "exists".
    pub async fn execute(&self, domain: &str) -> bool {
        match self
            .transport
            .query(RECURSIVE_RESOLVER, &fqdn(domain), RecordType::NS, true)
            .await
        {
            Ok(response) => {
                debug!(domain = %domain, rcode = %response.response_code, "Existence probe answered");
                !response.is_nxdomain()
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, "Existence probe failed, assuming registered");
                true
            }
        }
    }
}
