pub mod lookup_asn;
pub mod reverse_lookup;

pub use lookup_asn::LookupAsnUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
