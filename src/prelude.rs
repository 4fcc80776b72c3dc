/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # LibAwesome Client Prelude
//!
//! ```rust
//! use libawesome_client::prelude::*;
//!
//! let config = Config::with_base_url("https://libawesome.example.com/api/");
//! let client = HttpClient::new(config).expect("valid host");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the catalog client
pub use crate::application::config::{ApiHost, Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, ClientError};

// ============================================================================
// CLIENTS AND SERVICES
// ============================================================================

pub use crate::application::auth::Auth;
pub use crate::application::client::HttpClient;
pub use crate::application::interfaces::book::BookService;
pub use crate::application::interfaces::session::SessionService;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::auth::{Credentials, SessionToken, extract_token};
pub use crate::model::result::OperationResult;
pub use crate::presentation::{Book, BookId, BookList, DeleteFlow, DeleteState, Series};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
