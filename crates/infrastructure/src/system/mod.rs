pub mod host_resolver;
pub mod hostname_resolver;

pub use host_resolver::SystemHostResolver;
pub use hostname_resolver::SystemHostnameResolver;
