/// Dependency diff domain: value objects and pure services with no I/O.
pub mod domain;
pub mod services;
