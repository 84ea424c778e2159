/// Application layer - Use cases, DTOs and report dispatch
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dispatch;
pub mod dto;
pub mod factories;
pub mod use_cases;
