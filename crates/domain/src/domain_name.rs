use crate::errors::DomainError;

/// Append the root label if `name` is not already fully qualified.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Strip a single trailing root label.
pub fn trim_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Clean up a domain typed by a user: case, scheme, path, trailing dot.
pub fn normalize_domain_input(raw: &str) -> Result<String, DomainError> {
    let lowered = raw.trim().to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let host = without_scheme
        .split('/')
        .next()
        .unwrap_or_default();
    let host = trim_root(host);

    if host.is_empty() || host.contains(char::is_whitespace) || host.split('.').any(str::is_empty)
    {
        return Err(DomainError::InvalidDomainName(raw.to_string()));
    }

    Ok(host.to_string())
}

/// Zones walked by a delegation trace: the root, then every suffix of
/// `domain` from the TLD down to the full name, each fully qualified.
///
/// `www.example.co.uk` yields `[".", "uk.", "co.uk.", "example.co.uk.", "www.example.co.uk."]`.
pub fn zone_chain(domain: &str) -> Vec<String> {
    let labels: Vec<&str> = trim_root(domain)
        .split('.')
        .filter(|label| !label.is_empty())
        .collect();

    let mut zones = Vec::with_capacity(labels.len() + 1);
    zones.push(".".to_string());
    for start in (0..labels.len()).rev() {
        zones.push(format!("{}.", labels[start..].join(".")));
    }
    zones
}
