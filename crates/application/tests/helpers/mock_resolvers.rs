use async_trait::async_trait;
use dnscrawler_application::ports::{HostResolver, HostnameResolver};
use dnscrawler_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockHostResolver {
    hosts: Arc<Mutex<HashMap<String, Vec<IpAddr>>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_host(&self, host: &str, addresses: &[&str]) {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.hosts.lock().unwrap().insert(host.to_string(), parsed);
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.lookups.lock().unwrap().push(host.to_string());
        self.hosts
            .lock()
            .unwrap()
            .get(host)
            .cloned()
            .ok_or_else(|| DomainError::HostResolution {
                host: host.to_string(),
                reason: "no such host".to_string(),
            })
    }
}

#[derive(Clone, Default)]
pub struct MockHostnameResolver {
    names: Arc<Mutex<HashMap<IpAddr, Result<Option<String>, DomainError>>>>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hostname(&self, ip: &str, hostname: &str) {
        self.names
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), Ok(Some(hostname.to_string())));
    }

    pub fn set_error(&self, ip: &str, error: DomainError) {
        self.names
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), Err(error));
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.names
            .lock()
            .unwrap()
            .get(&ip)
            .cloned()
            .unwrap_or(Ok(None))
    }
}
