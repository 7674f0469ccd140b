use dnscrawler_application::ports::{HostResolver, HostnameResolver, QueryTransport};
use dnscrawler_application::use_cases::{
    CheckExistenceUseCase, GetNameserversUseCase, GetRecordsUseCase, InspectDomainUseCase,
    LookupAsnUseCase, ReverseLookupUseCase, TraceDelegationUseCase,
};
use dnscrawler_infrastructure::dns::UdpQueryTransport;
use dnscrawler_infrastructure::system::{SystemHostResolver, SystemHostnameResolver};
use std::sync::Arc;

pub struct UseCases {
    pub inspect_domain: Arc<InspectDomainUseCase>,
}

impl UseCases {
    pub fn new() -> Self {
        let transport: Arc<dyn QueryTransport> = Arc::new(UdpQueryTransport::new());
        let host_resolver: Arc<dyn HostResolver> = Arc::new(SystemHostResolver::new());
        let hostname_resolver: Arc<dyn HostnameResolver> = Arc::new(SystemHostnameResolver::new());

        let inspect_domain = InspectDomainUseCase::new(
            Arc::new(CheckExistenceUseCase::new(transport.clone())),
            Arc::new(GetNameserversUseCase::new(transport.clone())),
            Arc::new(TraceDelegationUseCase::new(transport.clone(), host_resolver)),
            Arc::new(GetRecordsUseCase::new(transport.clone())),
            Arc::new(LookupAsnUseCase::new(transport)),
            Arc::new(ReverseLookupUseCase::new(hostname_resolver)),
        );

        Self {
            inspect_domain: Arc::new(inspect_domain),
        }
    }
}
