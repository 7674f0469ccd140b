use serde::Serialize;

use crate::domain_name::trim_root;

/// Longest TXT value shown untouched.
pub const TXT_DISPLAY_LIMIT: usize = 60;
const TXT_ELLIPSIS: &str = "...";

/// Condensed view of the common record types of a domain.
///
/// Each field keeps the server's answer order without deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Records {
    #[serde(rename = "A")]
    pub a: Vec<String>,
    #[serde(rename = "AAAA")]
    pub aaaa: Vec<String>,
    #[serde(rename = "CNAME")]
    pub cname: Vec<String>,
    /// `"<preference> <exchange>"`.
    #[serde(rename = "MX")]
    pub mx: Vec<String>,
    #[serde(rename = "TXT")]
    pub txt: Vec<String>,
}

impl Records {
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
            && self.aaaa.is_empty()
            && self.cname.is_empty()
            && self.mx.is_empty()
            && self.txt.is_empty()
    }
}

pub fn format_mx(preference: u16, exchange: &str) -> String {
    format!("{} {}", preference, trim_root(exchange))
}

/// Join the character-strings of one TXT record and cut it down to
/// [`TXT_DISPLAY_LIMIT`] characters, marker included.
pub fn condense_txt<S: AsRef<str>>(segments: &[S]) -> String {
    let value: String = segments.iter().map(AsRef::as_ref).collect();
    if value.chars().count() <= TXT_DISPLAY_LIMIT {
        return value;
    }

    let keep = TXT_DISPLAY_LIMIT - TXT_ELLIPSIS.len();
    let mut condensed: String = value.chars().take(keep).collect();
    condensed.push_str(TXT_ELLIPSIS);
    condensed
}
