/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod lookup_request;
mod lookup_response;

pub use lookup_request::LookupRequest;
pub use lookup_response::{DependencyReport, LookupOutcome};
