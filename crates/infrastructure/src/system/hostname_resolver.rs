use async_trait::async_trait;
use dnscrawler_application::ports::HostnameResolver;
use dnscrawler_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

/// Reverse lookups through the OS resolver (`getnameinfo`), so hosts files,
/// nsswitch and local caches are honoured. One attempt per address.
#[derive(Debug, Default)]
pub struct SystemHostnameResolver;

impl SystemHostnameResolver {
    pub fn new() -> Self {
        Self
    }

    /// `getnameinfo` hands back the numeric form when no name exists.
    fn named(ip: IpAddr, resolved: String) -> Option<String> {
        match resolved.parse::<IpAddr>() {
            Ok(literal) if literal == ip => None,
            _ if resolved.is_empty() => None,
            _ => Some(resolved),
        }
    }
}

#[async_trait]
impl HostnameResolver for SystemHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        debug!(ip = %ip, "Performing system reverse lookup");

        let lookup = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&ip))
            .await
            .map_err(|e| DomainError::IoError(format!("Reverse lookup task failed: {}", e)))?;

        match lookup {
            Ok(resolved) => {
                let hostname = Self::named(ip, resolved);
                debug!(ip = %ip, hostname = ?hostname, "Reverse lookup finished");
                Ok(hostname)
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "Reverse lookup failed");
                Ok(None)
            }
        }
    }
}
