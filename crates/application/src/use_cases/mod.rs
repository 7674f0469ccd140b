pub mod dns;
pub mod enrichment;
pub mod inspect_domain;

pub use dns::{
    CheckExistenceUseCase, GetNameserversUseCase, GetRecordsUseCase, TraceDelegationUseCase,
};
pub use enrichment::{LookupAsnUseCase, ReverseLookupUseCase};
pub use inspect_domain::InspectDomainUseCase;
