/// Session client
pub mod auth;
/// Catalog API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the clients
pub mod interfaces;
