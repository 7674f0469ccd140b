//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Responses with the TC bit set are
//! handed back unchanged; there is no TCP fallback.

use dnscrawler_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Receive buffer size. Large enough for any plain UDP answer.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    /// Send one datagram and wait for one reply, within `timeout` overall.
    pub async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.io_error(e))?;

        // A connected socket only accepts datagrams from the server address.
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.io_error(e))?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!(server = %self.server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = socket
            .recv(&mut recv_buf)
            .await
            .map_err(|e| self.io_error(e))?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn io_error(&self, error: io::Error) -> DomainError {
        let server = self.server_addr.to_string();
        match error.kind() {
            io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
            io::ErrorKind::ConnectionReset => DomainError::TransportConnectionReset { server },
            io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
            _ => DomainError::IoError(format!("UDP exchange with {} failed: {}", server, error)),
        }
    }
}
