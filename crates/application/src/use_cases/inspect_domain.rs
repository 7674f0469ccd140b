use super::dns::{
    CheckExistenceUseCase, GetNameserversUseCase, GetRecordsUseCase, TraceDelegationUseCase,
};
use super::enrichment::{LookupAsnUseCase, ReverseLookupUseCase};
use dnscrawler_domain::config::LookupConfig;
use dnscrawler_domain::{
    AddressEntry, DomainReport, NameserverEntry, Records, RecordsReport, Section,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Full report for one domain, gathered strictly one query at a time.
pub struct InspectDomainUseCase {
    check_existence: Arc<CheckExistenceUseCase>,
    get_nameservers: Arc<GetNameserversUseCase>,
    trace_delegation: Arc<TraceDelegationUseCase>,
    get_records: Arc<GetRecordsUseCase>,
    lookup_asn: Arc<LookupAsnUseCase>,
    reverse_lookup: Arc<ReverseLookupUseCase>,
}

impl InspectDomainUseCase {
    pub fn new(
        check_existence: Arc<CheckExistenceUseCase>,
        get_nameservers: Arc<GetNameserversUseCase>,
        trace_delegation: Arc<TraceDelegationUseCase>,
        get_records: Arc<GetRecordsUseCase>,
        lookup_asn: Arc<LookupAsnUseCase>,
        reverse_lookup: Arc<ReverseLookupUseCase>,
    ) -> Self {
        Self {
            check_existence,
            get_nameservers,
            trace_delegation,
            get_records,
            lookup_asn,
            reverse_lookup,
        }
    }

    pub async fn execute(&self, domain: &str, options: LookupConfig) -> DomainReport {
        if !self.check_existence.execute(domain).await {
            info!(domain = %domain, "Domain not registered");
            return DomainReport::unregistered(domain);
        }

        let nameservers = self.nameservers(domain, options).await;

        let trace = if options.trace {
            Some(match self.trace_delegation.execute(domain).await {
                Ok(steps) => Section::ok(steps),
                Err(e) => {
                    warn!(domain = %domain, error = %e, "Trace failed");
                    Section::failed(e.to_string())
                }
            })
        } else {
            None
        };

        let records = self.get_records.execute(domain).await;
        let records = self.enrich_records(records, options).await;

        DomainReport {
            domain: domain.to_string(),
            registered: true,
            nameservers: Some(nameservers),
            trace,
            records: Some(records),
        }
    }

    async fn nameservers(&self, domain: &str, options: LookupConfig) -> Section<NameserverEntry> {
        let nameservers = match self.get_nameservers.execute(domain).await {
            Ok(nameservers) => nameservers,
            Err(e) => {
                warn!(domain = %domain, error = %e, "Nameserver lookup failed");
                return Section::failed(e.to_string());
            }
        };

        let mut entries = Vec::with_capacity(nameservers.len());
        for nameserver in nameservers {
            let asn = match nameserver.ip {
                Some(ip) if options.asn => self.lookup_asn.execute(&ip.to_string()).await,
                _ => None,
            };
            entries.push(NameserverEntry { nameserver, asn });
        }
        Section::ok(entries)
    }

    async fn enrich_records(&self, records: Records, options: LookupConfig) -> RecordsReport {
        let mut a = Vec::with_capacity(records.a.len());
        for address in records.a {
            a.push(self.enrich_address(address, options).await);
        }

        let mut aaaa = Vec::with_capacity(records.aaaa.len());
        for address in records.aaaa {
            aaaa.push(self.enrich_address(address, options).await);
        }

        RecordsReport {
            cname: records.cname,
            a,
            aaaa,
            mx: records.mx,
            txt: records.txt,
        }
    }

    async fn enrich_address(&self, address: String, options: LookupConfig) -> AddressEntry {
        let mut entry = AddressEntry::bare(address);
        if options.reverse {
            entry.hostname = self.reverse_lookup.execute(&entry.address).await;
        }
        if options.asn {
            entry.asn = self.lookup_asn.execute(&entry.address).await;
        }
        entry
    }
}
