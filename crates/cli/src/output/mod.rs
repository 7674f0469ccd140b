//! Plain-text rendering of a [`DomainReport`].

use dnscrawler_domain::{AddressEntry, AsnInfo, DomainReport, RecordsReport, Section};
use std::fmt::Write;

const RECORD_TYPE_WIDTH: usize = 6;
const ZONE_WIDTH: usize = 24;

pub fn render_text(report: &DomainReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.domain);

    if !report.registered {
        let _ = writeln!(out, "  Domain not registered");
        return out;
    }

    if let Some(nameservers) = &report.nameservers {
        section(&mut out, "NAMESERVERS");
        render_items(&mut out, nameservers, "lookup failed", "No nameservers found", |out, entry| {
            let mut line = match entry.nameserver.ip {
                Some(ip) => format!("-> {} ({})", entry.nameserver.name, ip),
                None => format!("-> {}", entry.nameserver.name),
            };
            push_asn(&mut line, entry.asn.as_ref());
            let _ = writeln!(out, "  {}", line);
        });
    }

    if let Some(trace) = &report.trace {
        section(&mut out, "DNS TRACE");
        render_items(&mut out, trace, "trace failed", "No trace data", |out, step| {
            let _ = writeln!(out, "  {:<width$} {}", step.zone, step.server, width = ZONE_WIDTH);
        });
    }

    if let Some(records) = &report.records {
        section(&mut out, "RECORDS");
        render_records(&mut out, records);
    }

    out
}

fn section(out: &mut String, name: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", name);
}

fn render_items<T>(
    out: &mut String,
    section: &Section<T>,
    failure: &str,
    empty: &str,
    mut render: impl FnMut(&mut String, &T),
) {
    if let Some(error) = &section.error {
        let _ = writeln!(out, "  {}: {}", failure, error);
    } else if section.items.is_empty() {
        let _ = writeln!(out, "  {}", empty);
    } else {
        for item in &section.items {
            render(out, item);
        }
    }
}

fn render_records(out: &mut String, records: &RecordsReport) {
    if records.is_empty() {
        let _ = writeln!(out, "  No records found");
        return;
    }

    for cname in &records.cname {
        record_line(out, "CNAME", cname);
    }
    for entry in &records.a {
        record_line(out, "A", &address_line(entry));
    }
    for entry in &records.aaaa {
        record_line(out, "AAAA", &address_line(entry));
    }
    for mx in &records.mx {
        record_line(out, "MX", mx);
    }
    for txt in &records.txt {
        record_line(out, "TXT", txt);
    }
}

fn record_line(out: &mut String, record_type: &str, value: &str) {
    let _ = writeln!(out, "  {:<width$} {}", record_type, value, width = RECORD_TYPE_WIDTH);
}

fn address_line(entry: &AddressEntry) -> String {
    let mut line = entry.address.clone();
    if let Some(hostname) = &entry.hostname {
        let _ = write!(line, "  {}", hostname);
    }
    push_asn(&mut line, entry.asn.as_ref());
    line
}

fn push_asn(line: &mut String, asn: Option<&AsnInfo>) {
    if let Some(asn) = asn {
        let _ = write!(line, "  [{}]", asn.label());
    }
}
