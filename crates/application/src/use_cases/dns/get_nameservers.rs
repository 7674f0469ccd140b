use crate::ports::QueryTransport;
use dnscrawler_domain::endpoints::RECURSIVE_RESOLVER;
use dnscrawler_domain::{fqdn, trim_root, DomainError, Nameserver, RecordData, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct GetNameserversUseCase {
    transport: Arc<dyn QueryTransport>,
}

impl GetNameserversUseCase {
    pub fn new(transport: Arc<dyn QueryTransport>) -> Self {
        Self { transport }
    }

    /// NS set of `domain` in answer order, each paired with its first A record.
    ///
    /// Only the NS query itself can fail the call; a nameserver whose
    /// address lookup fails is kept with `ip: None`.
    pub async fn execute(&self, domain: &str) -> Result<Vec<Nameserver>, DomainError> {
        let response = self
            .transport
            .query(RECURSIVE_RESOLVER, &fqdn(domain), RecordType::NS, true)
            .await?;

        let targets: Vec<String> = response
            .answers
            .iter()
            .filter_map(|record| match &record.data {
                RecordData::NS(target) => Some(target.clone()),
                _ => None,
            })
            .collect();

        debug!(domain = %domain, count = targets.len(), "Nameservers found");

        let mut nameservers = Vec::with_capacity(targets.len());
        for target in targets {
            let ip = self.resolve_address(&target).await;
            nameservers.push(Nameserver::new(trim_root(&target), ip));
        }

        Ok(nameservers)
    }

    async fn resolve_address(&self, target: &str) -> Option<Ipv4Addr> {
        match self
            .transport
            .query(RECURSIVE_RESOLVER, &fqdn(target), RecordType::A, true)
            .await
        {
            Ok(response) => response.answers.iter().find_map(|record| match record.data {
                RecordData::A(addr) => Some(addr),
                _ => None,
            }),
            Err(e) => {
                warn!(nameserver = %target, error = %e, "Nameserver address lookup failed");
                None
            }
        }
    }
}
