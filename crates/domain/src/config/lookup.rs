use serde::{Deserialize, Serialize};

/// Which optional sections of a domain report are gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Walk the delegation chain from the root.
    #[serde(default = "default_true")]
    pub trace: bool,

    /// Attribute addresses to their origin AS.
    #[serde(default = "default_true")]
    pub asn: bool,

    /// Resolve PTR names for A and AAAA records.
    #[serde(default = "default_true")]
    pub reverse: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            trace: true,
            asn: true,
            reverse: true,
        }
    }
}

fn default_true() -> bool {
    true
}
