use crate::ports::{HostResolver, QueryTransport};
use dnscrawler_domain::endpoints::{dns_socket, root_server_name, ROOT_SERVERS};
use dnscrawler_domain::{trim_root, zone_chain, DomainError, RecordType, TraceStep};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// What one zone query taught us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// First NS target of the response, fully qualified.
    pub nameserver: String,
    /// Its address, from glue or from the system resolver.
    pub address: Option<IpAddr>,
}

/// Accumulator of the delegation walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceState {
    pub server: IpAddr,
    pub steps: Vec<TraceStep>,
}

impl TraceState {
    /// Seed a walk at `root`; the root step is asserted, not queried.
    pub fn at_root(root: IpAddr) -> Self {
        let name = match root {
            IpAddr::V4(v4) => root_server_name(v4),
            IpAddr::V6(v6) => v6.to_string(),
        };
        Self {
            server: root,
            steps: vec![TraceStep::new(".", name)],
        }
    }

    /// Fold one zone outcome into the state.
    ///
    /// No hop (transport error or no NS in the response) leaves the state
    /// untouched. A hop without an address records the step but keeps
    /// querying the previous server.
    pub fn advance(mut self, zone: &str, hop: Option<Hop>) -> Self {
        if let Some(hop) = hop {
            self.steps
                .push(TraceStep::new(zone, trim_root(&hop.nameserver)));
            if let Some(address) = hop.address {
                self.server = address;
            }
        }
        self
    }
}

/// Best-effort walk of the delegation chain from the root down to a domain.
///
/// Each zone is asked for its NS set, non-recursively, at the server found
/// for the zone above. Every zone is visited exactly once, so the walk
/// yields at most one step per label plus the root.
pub struct TraceDelegationUseCase {
    transport: Arc<dyn QueryTransport>,
    host_resolver: Arc<dyn HostResolver>,
}

impl TraceDelegationUseCase {
    pub fn new(transport: Arc<dyn QueryTransport>, host_resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            transport,
            host_resolver,
        }
    }

    pub async fn execute(&self, domain: &str) -> Result<Vec<TraceStep>, DomainError> {
        if trim_root(domain).is_empty() {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }

        let root = IpAddr::V4(ROOT_SERVERS[0].0);
        let mut state = TraceState::at_root(root);

        for zone in zone_chain(domain).iter().skip(1) {
            let hop = self.query_zone(zone, state.server).await;
            state = state.advance(zone, hop);
        }

        info!(domain = %domain, steps = state.steps.len(), "Delegation trace finished");
        Ok(state.steps)
    }

    async fn query_zone(&self, zone: &str, server: IpAddr) -> Option<Hop> {
        let response = match self
            .transport
            .query(dns_socket(server), zone, RecordType::NS, false)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(zone = %zone, server = %server, error = %e, "Zone query failed, skipping");
                return None;
            }
        };

        let nameserver = response.delegation_targets().first()?.to_string();

        let address = match response.glue_for(&nameserver) {
            Some(glue) => Some(IpAddr::V4(glue)),
            None => self.resolve_without_glue(&nameserver).await,
        };

        debug!(
            zone = %zone,
            server = %server,
            nameserver = %nameserver,
            next = ?address,
            "Delegation step"
        );

        Some(Hop {
            nameserver,
            address,
        })
    }

    async fn resolve_without_glue(&self, nameserver: &str) -> Option<IpAddr> {
        match self.host_resolver.lookup_host(trim_root(nameserver)).await {
            Ok(addresses) => addresses.into_iter().next(),
            Err(e) => {
                debug!(nameserver = %nameserver, error = %e, "No glue and system lookup failed");
                None
            }
        }
    }
}
