use dnscrawler_domain::{normalize_domain_input, zone_chain, DomainError};

#[test]
fn test_plain_domain_is_kept() {
    assert_eq!(normalize_domain_input("example.com").unwrap(), "example.com");
}

#[test]
fn test_case_and_whitespace_are_normalized() {
    assert_eq!(
        normalize_domain_input("  WWW.Example.COM \n").unwrap(),
        "www.example.com"
    );
}

#[test]
fn test_url_is_reduced_to_host() {
    assert_eq!(
        normalize_domain_input("https://www.example.com/path?q=1").unwrap(),
        "www.example.com"
    );
    assert_eq!(
        normalize_domain_input("http://example.org/").unwrap(),
        "example.org"
    );
}

#[test]
fn test_trailing_dot_is_dropped() {
    assert_eq!(normalize_domain_input("example.com.").unwrap(), "example.com");
}

#[test]
fn test_invalid_inputs_are_rejected() {
    for raw in ["", "   ", "https://", "exa mple.com", "example..com", ".com"] {
        assert!(
            matches!(
                normalize_domain_input(raw),
                Err(DomainError::InvalidDomainName(_))
            ),
            "expected rejection for {:?}",
            raw
        );
    }
}

#[test]
fn test_zone_chain_length_is_labels_plus_root() {
    let zones = zone_chain("a.b.c.example.com");
    assert_eq!(zones.len(), 6);
    assert_eq!(zones.first().map(String::as_str), Some("."));
    assert_eq!(zones.last().map(String::as_str), Some("a.b.c.example.com."));
}
