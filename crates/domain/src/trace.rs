use serde::Serialize;

/// One level of a delegation walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// Fully qualified zone, `"."` for the root.
    pub zone: String,

    /// Hostname (or IP literal) seen as authoritative for `zone`.
    pub server: String,
}

impl TraceStep {
    pub fn new(zone: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            server: server.into(),
        }
    }
}
