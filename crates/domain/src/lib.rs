//! dnscrawler domain layer
pub mod asn;
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod domain_name;
pub mod endpoints;
pub mod errors;
pub mod nameserver;
pub mod records;
pub mod report;
pub mod trace;

pub use asn::AsnInfo;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, ResponseCode};
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use domain_name::{fqdn, normalize_domain_input, trim_root, zone_chain};
pub use errors::DomainError;
pub use nameserver::Nameserver;
pub use records::Records;
pub use report::{AddressEntry, DomainReport, NameserverEntry, RecordsReport, Section};
pub use trace::TraceStep;
