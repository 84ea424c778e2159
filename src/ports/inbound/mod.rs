/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod dependency_diff_port;

pub use dependency_diff_port::DependencyDiffPort;
