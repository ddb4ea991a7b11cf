//! depscout - list the dependencies of an npm package from its source repository
//!
//! Given a package name, depscout scrapes the registry page for the
//! repository link, fetches `package.json` from the repository's raw file
//! host and prints the declared `devDependencies` and `dependencies`, each
//! with a link to its registry page.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_lookup`): Pure models and the retry policy
//! - **Application Layer** (`application`): The lookup use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types, result alias, logging setup
//!
//! # Example
//!
//! ```no_run
//! use depscout::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let config = ScoutConfig::default();
//! let transport = HttpTransport::new(&config)?;
//!
//! let use_case = LookupDependenciesUseCase::new(
//!     NpmRegistryClient::new(transport.clone(), config.clone()),
//!     RawManifestClient::new(transport, config.clone()),
//!     DependencyListFormatter::new(config.registry_url.clone(), true),
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(true),
//!     LookupSettings::from_config(&config),
//! );
//!
//! let outcome = use_case.execute(LookupRequest::for_package("chalk")).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_lookup;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::DependencyListFormatter;
    pub use crate::adapters::outbound::network::{
        HttpTransport, NpmRegistryClient, RawManifestClient,
    };
    pub use crate::application::dto::{DependencyReport, LookupOutcome, LookupRequest};
    pub use crate::application::use_cases::{
        LookupDependenciesUseCase, LookupSettings, FIREWALL_HINT, PROMPT_MESSAGE,
    };
    pub use crate::config::{ConfigOverrides, ScoutConfig};
    pub use crate::dependency_lookup::domain::{
        DependencyMap, DependencySection, Manifest, PackageQuery, RepositoryIdentifier,
        RepositoryLinks,
    };
    pub use crate::dependency_lookup::policies::{FailureClass, RetryPolicy};
    pub use crate::ports::outbound::{
        FetchedManifest, LookupStage, ManifestFetcher, OutputPresenter, ProgressReporter,
        ReportFormatter, RepositoryResolver,
    };
    pub use crate::shared::error::{NetworkFailure, ScoutError};
    pub use crate::shared::Result;
}
