//! dnscrawler application layer: ports and lookup use cases.
pub mod ports;
pub mod use_cases;
