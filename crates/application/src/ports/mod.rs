mod host_resolver;
mod hostname_resolver;
mod query_transport;

pub use host_resolver::HostResolver;
pub use hostname_resolver::HostnameResolver;
pub use query_transport::QueryTransport;
