use crate::error::ClientError;
use crate::model::auth::{Credentials, SessionToken};
use async_trait::async_trait;

/// Interface for the session service
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Exchanges credentials for a session token
    ///
    /// One request per call, no retries. Every failure the user can recover
    /// from comes back as a [`ClientError`].
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ClientError>;
}
