/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Two-branch outcome of a client call
//!
//! Serializes to the legacy `{"success": ".."}` / `{"error": ".."}` map that
//! UI collaborators consume, with exactly one key present.

use crate::constants::DELETE_SUCCESS_MESSAGE;
use crate::error::ClientError;
use crate::model::auth::SessionToken;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a login or delete call
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationResult {
    /// Payload of the successful call (a token for login)
    Success(String),
    /// User facing error message
    Error(String),
}

impl OperationResult {
    /// Reads a legacy result map
    ///
    /// A map with neither key becomes `Error("Unknown error")`. A map with both
    /// keys breaks the one-branch rule and is rejected.
    pub fn from_legacy(map: &BTreeMap<String, String>) -> Result<Self, ClientError> {
        match (map.get("success"), map.get("error")) {
            (Some(_), Some(_)) => Err(ClientError::UnrecognizedResponse(
                "both success and error are present".to_string(),
            )),
            (Some(payload), None) => Ok(OperationResult::Success(payload.clone())),
            (None, Some(message)) => Ok(OperationResult::Error(message.clone())),
            (None, None) => Ok(OperationResult::Error(ClientError::Unknown.to_string())),
        }
    }

    /// Legacy map form, always exactly one entry
    pub fn to_legacy(&self) -> BTreeMap<String, String> {
        let (key, value) = match self {
            OperationResult::Success(payload) => ("success", payload),
            OperationResult::Error(message) => ("error", message),
        };
        BTreeMap::from([(key.to_string(), value.clone())])
    }

    /// True for the success branch
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    /// Success payload, if any
    pub fn success(&self) -> Option<&str> {
        match self {
            OperationResult::Success(payload) => Some(payload),
            OperationResult::Error(_) => None,
        }
    }

    /// Error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Error(message) => Some(message),
        }
    }
}

impl From<Result<SessionToken, ClientError>> for OperationResult {
    fn from(result: Result<SessionToken, ClientError>) -> Self {
        match result {
            Ok(token) => OperationResult::Success(token.into()),
            Err(e) => OperationResult::Error(e.to_string()),
        }
    }
}

impl From<Result<(), ClientError>> for OperationResult {
    fn from(result: Result<(), ClientError>) -> Self {
        match result {
            Ok(()) => OperationResult::Success(DELETE_SUCCESS_MESSAGE.to_string()),
            Err(e) => OperationResult::Error(e.to_string()),
        }
    }
}
