/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # LibAwesome Client
//!
//! Client for the LibAwesome library catalog API.
//!
//! - [`application::auth::Auth`] exchanges a username and password for a
//!   session token (`POST auth-token/`).
//! - [`application::client::HttpClient`] performs authenticated mutations,
//!   currently deleting a book (`DELETE books/{id}/`).
//! - [`presentation`] holds the local book and series models and the delete
//!   confirmation flow that keeps the local list in step with the server.
//!
//! Every recoverable failure is returned as a [`error::ClientError`]; the
//! legacy `{"success" | "error": ..}` shape is available through
//! [`model::result::OperationResult`]. A malformed API host is reported as
//! [`error::AppError::Configuration`] when the client is built.

/// Session client, catalog client, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and HTTP plumbing
pub mod model;
/// Commonly used types
pub mod prelude;
/// Local catalog models and UI flows
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
