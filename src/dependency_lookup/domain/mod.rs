pub mod manifest;
pub mod package_query;
pub mod repository;

pub use manifest::{DependencyMap, DependencySection, Manifest};
pub use package_query::PackageQuery;
pub use repository::{RepositoryIdentifier, RepositoryLinks};
