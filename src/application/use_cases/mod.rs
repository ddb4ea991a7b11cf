/// Use cases module containing application business logic orchestration
mod lookup_dependencies;

pub use lookup_dependencies::{
    LookupDependenciesUseCase, LookupSettings, FIREWALL_HINT, PROMPT_MESSAGE,
};
