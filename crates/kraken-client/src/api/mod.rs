//! Twitch Kraken REST API client.
//!
//! Typed access to the v5 resource endpoints with Client-ID and
//! versioned Accept header injection.

mod follows;
mod moderation;
mod request;
mod subscriptions;
mod users;

pub mod models;

pub use models::{Block, Channel, Follow, Follows, Notifications, Subscription, User, UserList};

use crate::Access;

/// Media type selecting v5 of the API.
const ACCEPT_V5: &str = "application/vnd.twitchtv.v5+json";

/// Endpoint configuration shared by every call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host and path prefix for all requests, without a trailing slash.
    pub base_url: String,
    /// HTTP client reused across calls.
    pub http: reqwest::Client,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twitch.tv/kraken".to_string(),
            http: reqwest::Client::new(),
        }
    }
}

/// Application credentials for unauthenticated and OAuth-bootstrap calls.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    client_id: String,
    secret: String,
    redirect_uri: String,
}

impl Client {
    /// Create a client against the production endpoint.
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self::with_config(client_id, secret, redirect_uri, ClientConfig::default())
    }

    /// Create a client with an explicit endpoint configuration.
    pub fn with_config(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        config: ClientConfig,
    ) -> Self {
        Self {
            config,
            client_id: client_id.into(),
            secret: secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    pub(crate) fn base(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.config.http
    }

    /// Pair the client with an access token for authenticated calls.
    pub fn with_access(&self, access: Access) -> AccessClient {
        AccessClient {
            client: self.clone(),
            access,
        }
    }
}

/// A [`Client`] bound to an [`Access`], used for authenticated calls.
#[derive(Debug, Clone)]
pub struct AccessClient {
    client: Client,
    access: Access,
}

impl AccessClient {
    pub fn access(&self) -> &Access {
        &self.access
    }

    pub(crate) fn base(&self) -> &str {
        self.client.base()
    }

    /// Short-circuits scope-gated operations before any network call.
    pub(crate) fn validate_scope(&self, scope: &str) -> Result<(), crate::KrakenError> {
        self.access.validate_scope(scope)
    }
}
