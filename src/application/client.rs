/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the catalog API
//!
//! Bundles the session client ([`Auth`]) with the authenticated mutation
//! calls. The session token is always passed in by the caller.
//!
//! # Example
//! ```ignore
//! use libawesome_client::prelude::*;
//!
//! let client = HttpClient::new(Config::new())?;
//! let token = client.authenticate("sabrina", "secret").await?;
//! client.delete_book(&token, 7).await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::{ApiHost, Config};
use crate::application::interfaces::book::BookService;
use crate::application::interfaces::session::SessionService;
use crate::constants::USER_AGENT;
use crate::error::{AppError, ClientError};
use crate::model::auth::{Credentials, SessionToken};
use crate::model::http::{RequestBody, check_status, make_http_request};
use crate::presentation::book::BookId;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::sync::Arc;
use tracing::info;

/// Catalog API client
///
/// Holds no session state: every mutation takes the token explicitly, and
/// cloning is cheap.
#[derive(Debug, Clone)]
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
    host: ApiHost,
}

impl HttpClient {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API host
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError::Configuration)` - If the API host is malformed; the
    ///   caller should abort startup
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let host = config.validate()?;

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        let auth = Arc::new(Auth::with_client(
            config.clone(),
            host.clone(),
            http_client.clone(),
        ));

        Ok(Self {
            auth,
            http_client,
            config,
            host,
        })
    }

    /// Logs in, see [`Auth::authenticate`]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionToken, ClientError> {
        self.auth.authenticate(username, password).await
    }

    /// Makes an authenticated request and checks its status
    async fn authorized_request(
        &self,
        method: Method,
        url: &str,
        token: &SessionToken,
    ) -> Result<(), ClientError> {
        let authorization = token.authorization(&self.config.auth_scheme);
        let headers = vec![
            ("Accept", "application/json"),
            ("Authorization", authorization.as_str()),
        ];

        let response =
            make_http_request(&self.http_client, method, url, headers, RequestBody::Empty).await?;
        check_status(response).await?;
        Ok(())
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Validated host in use
    pub fn host(&self) -> &ApiHost {
        &self.host
    }
}

#[async_trait]
impl SessionService for HttpClient {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ClientError> {
        self.auth.login(credentials).await
    }
}

#[async_trait]
impl BookService for HttpClient {
    async fn delete_book(&self, token: &SessionToken, book_id: BookId) -> Result<(), ClientError> {
        let url = self.host.book_url(book_id);
        self.authorized_request(Method::DELETE, &url, token).await?;
        info!("✓ Book {} deleted", book_id);
        Ok(())
    }
}
