//! Fixed network endpoints used by the crawler.
//!
//! None of these are configurable: every lookup goes to one public
//! recursive resolver, and traces start from one of three root servers.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

pub const DNS_PORT: u16 = 53;

/// Public recursive resolver for every recursion-desired query.
pub const RECURSIVE_RESOLVER: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(8, 8, 8, 8), DNS_PORT));

/// Per-query timeout. There is no deadline spanning several queries.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Root servers with their display names. The first entry starts every trace.
pub const ROOT_SERVERS: [(Ipv4Addr, &str); 3] = [
    (Ipv4Addr::new(198, 41, 0, 4), "a.root-servers.net"),
    (Ipv4Addr::new(199, 9, 14, 201), "b.root-servers.net"),
    (Ipv4Addr::new(192, 33, 4, 12), "c.root-servers.net"),
];

pub const CYMRU_ORIGIN_SUFFIX: &str = ".origin.asn.cymru.com.";
pub const CYMRU_ORIGIN6_SUFFIX: &str = ".origin6.asn.cymru.com.";
pub const CYMRU_ASN_SUFFIX: &str = ".asn.cymru.com.";

/// Display name for a root server literal, or the literal itself.
pub fn root_server_name(ip: Ipv4Addr) -> String {
    ROOT_SERVERS
        .iter()
        .find(|(addr, _)| *addr == ip)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| ip.to_string())
}

pub fn dns_socket(ip: std::net::IpAddr) -> SocketAddr {
    SocketAddr::new(ip, DNS_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_names() {
        assert_eq!(root_server_name(ROOT_SERVERS[0].0), "a.root-servers.net");
        assert_eq!(
            root_server_name(Ipv4Addr::new(192, 33, 4, 12)),
            "c.root-servers.net"
        );
        assert_eq!(root_server_name(Ipv4Addr::new(10, 0, 0, 1)), "10.0.0.1");
    }

    #[test]
    fn test_resolver_endpoint() {
        assert_eq!(RECURSIVE_RESOLVER.to_string(), "8.8.8.8:53");
        assert_eq!(QUERY_TIMEOUT.as_secs(), 5);
    }
}
