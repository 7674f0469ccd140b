use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Host resolution failed for {host}: {reason}")]
    HostResolution { host: String, reason: String },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },
}

impl DomainError {
    /// Whether the failure happened on the wire rather than in the answer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::TransportTimeout { .. }
                | Self::TransportConnectionRefused { .. }
                | Self::TransportConnectionReset { .. }
                | Self::IoError(_)
                | Self::InvalidDnsResponse(_)
        )
    }
}
