/// Network adapters for the registry and the raw file host
mod http_transport;
mod npm_registry_client;
mod raw_manifest_client;

pub use http_transport::{classify_reqwest_error, HttpResponse, HttpTransport};
pub use npm_registry_client::NpmRegistryClient;
pub use raw_manifest_client::RawManifestClient;
