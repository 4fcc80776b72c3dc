/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session authentication for the catalog API
//!
//! Turns a username and password into a [`SessionToken`] with a single
//! `POST {API_HOST}auth-token/` carrying form encoded credentials. The token
//! is handed to the caller and never cached here.

use crate::application::config::{ApiHost, Config};
use crate::application::interfaces::session::SessionService;
use crate::constants::USER_AGENT;
use crate::error::{AppError, ClientError};
use crate::model::auth::{Credentials, SessionToken, extract_token};
use crate::model::http::{RequestBody, make_http_request};
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication manager for the catalog API
#[derive(Debug, Clone)]
pub struct Auth {
    config: Arc<Config>,
    host: ApiHost,
    client: Client,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// Validates the configured host, so a broken configuration surfaces here
    /// rather than on the first login.
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API host
    ///
    /// # Returns
    /// * `Err(AppError::Configuration)` - If the API host is malformed
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let host = config.validate()?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(config, host, client))
    }

    /// Builds an Auth around an existing HTTP client and validated host
    pub fn with_client(config: Arc<Config>, host: ApiHost, client: Client) -> Self {
        Self {
            config,
            host,
            client,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validated host in use
    pub fn host(&self) -> &ApiHost {
        &self.host
    }

    /// Logs in with a username and password
    ///
    /// # Returns
    /// * `Ok(SessionToken)` - Token issued by the server
    /// * `Err(ClientError::Transport)` - The request never got a response
    /// * `Err(ClientError::InvalidCredentials)` - Any response without a token
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionToken, ClientError> {
        let fields = [("username", username), ("password", password)];
        let url = self.host.auth_token_url().as_str();

        debug!("Sending login request for {} to: {}", username, url);

        let response = make_http_request(
            &self.client,
            Method::POST,
            url,
            vec![("Accept", "application/json")],
            RequestBody::Form(&fields),
        )
        .await?;

        let status = response.status();
        let body = response.bytes().await?;

        match extract_token(&body) {
            Some(token) => {
                if !status.is_success() {
                    warn!("Token issued with unexpected status {}", status);
                }
                info!("✓ Login successful for {}", username);
                Ok(token)
            }
            None => {
                if status.is_success() {
                    warn!("Login response with status {} carried no token", status);
                } else {
                    warn!(
                        "Login rejected with status {}: {}",
                        status,
                        String::from_utf8_lossy(&body)
                    );
                }
                Err(ClientError::InvalidCredentials)
            }
        }
    }
}

#[async_trait]
impl SessionService for Auth {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ClientError> {
        self.authenticate(&credentials.username, &credentials.password)
            .await
    }
}
