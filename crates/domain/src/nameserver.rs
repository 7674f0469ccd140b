use serde::Serialize;
use std::net::Ipv4Addr;

/// An authoritative nameserver as reported by the recursive resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nameserver {
    /// Hostname without the trailing dot.
    pub name: String,

    /// First A answer for `name`; `None` when that lookup failed or was empty.
    pub ip: Option<Ipv4Addr>,
}

impl Nameserver {
    pub fn new(name: impl Into<String>, ip: Option<Ipv4Addr>) -> Self {
        Self {
            name: name.into(),
            ip,
        }
    }
}
