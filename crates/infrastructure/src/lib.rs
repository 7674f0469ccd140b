//! dnscrawler infrastructure: wire codec, UDP transport and OS resolvers.
pub mod dns;
pub mod system;
