//! Twitch Kraken (v5) REST API client.
//!
//! Wraps the OAuth2 authorization-code flow and the user, channel,
//! subscription, follow, and block endpoints behind typed
//! request/response structures.

pub mod api;
pub mod auth;

use serde::{Deserialize, Serialize};

/// Scope required to read the authenticated user's profile.
pub const SCOPE_USER_READ: &str = "user_read";
/// Scope required to check a user's subscriptions.
pub const SCOPE_USER_SUBSCRIPTIONS: &str = "user_subscriptions";
/// Scope required to follow or unfollow channels on a user's behalf.
pub const SCOPE_USER_FOLLOWS_EDIT: &str = "user_follows_edit";
/// Scope required to manage a user's block list.
pub const SCOPE_USER_BLOCKS_EDIT: &str = "user_blocks_edit";

/// An access token together with the scopes granted for it.
///
/// Deserializes directly from the token endpoint response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Access {
    #[serde(rename = "access_token")]
    pub token: String,
    pub scope: Vec<String>,
}

impl Access {
    /// Create an `Access` from a known token/scope combination.
    pub fn new(token: impl Into<String>, scope: Vec<String>) -> Self {
        Self {
            token: token.into(),
            scope,
        }
    }

    /// Succeeds iff `scope` was granted for this token.
    pub fn validate_scope(&self, scope: &str) -> Result<(), KrakenError> {
        if self.scope.iter().any(|granted| granted == scope) {
            Ok(())
        } else {
            Err(KrakenError::MissingScope(scope.to_string()))
        }
    }
}

/// Unified error type for the kraken-client crate.
#[derive(Debug, thiserror::Error)]
pub enum KrakenError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("access token is missing the '{0}' scope")]
    MissingScope(String),

    #[error("user is not subscribed")]
    NotSubscribed,

    #[error("channel does not have a subscription program")]
    NoSubscriptionProgram,

    #[error("user {user_id} does not follow channel {channel_id}")]
    NotFollowing { user_id: String, channel_id: String },

    #[error("user {user_id} could not follow channel {channel_id}")]
    FollowRejected { user_id: String, channel_id: String },

    #[error("failed to unfollow user {user_id} from channel {channel_id}")]
    UnfollowFailed { user_id: String, channel_id: String },

    #[error("Twitch API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
