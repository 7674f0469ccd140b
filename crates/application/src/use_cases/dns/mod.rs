pub mod check_existence;
pub mod get_nameservers;
pub mod get_records;
pub mod trace_delegation;

pub use check_existence::CheckExistenceUseCase;
pub use get_nameservers::GetNameserversUseCase;
pub use get_records::GetRecordsUseCase;
pub use trace_delegation::TraceDelegationUseCase;
