/// Ports module defining interfaces for hexagonal architecture
///
/// The lookup is driven from `main`, so only outbound (driven) ports exist.
pub mod outbound;
