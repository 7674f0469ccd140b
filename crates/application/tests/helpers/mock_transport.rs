use async_trait::async_trait;
use dnscrawler_application::ports::QueryTransport;
use dnscrawler_domain::{DnsMessage, DomainError, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

type Key = (SocketAddr, String, RecordType);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCall {
    pub server: SocketAddr,
    pub name: String,
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

/// Scripted transport: answers by `(server, name, type)`, times out otherwise.
#[derive(Clone, Default)]
pub struct MockQueryTransport {
    responses: Arc<Mutex<HashMap<Key, Result<DnsMessage, DomainError>>>>,
    calls: Arc<Mutex<Vec<QueryCall>>>,
}

impl MockQueryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(
        &self,
        server: SocketAddr,
        name: &str,
        record_type: RecordType,
        response: DnsMessage,
    ) {
        self.responses
            .lock()
            .unwrap()
            .insert((server, name.to_string(), record_type), Ok(response));
    }

    pub fn set_error(
        &self,
        server: SocketAddr,
        name: &str,
        record_type: RecordType,
        error: DomainError,
    ) {
        self.responses
            .lock()
            .unwrap()
            .insert((server, name.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<QueryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl QueryTransport for MockQueryTransport {
    async fn query(
        &self,
        server: SocketAddr,
        name: &str,
        record_type: RecordType,
        recursion_desired: bool,
    ) -> Result<DnsMessage, DomainError> {
        self.calls.lock().unwrap().push(QueryCall {
            server,
            name: name.to_string(),
            record_type,
            recursion_desired,
        });

        self.responses
            .lock()
            .unwrap()
            .get(&(server, name.to_string(), record_type))
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::TransportTimeout {
                    server: server.to_string(),
                })
            })
    }
}
