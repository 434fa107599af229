use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Twitch user record.
///
/// Depending on the method of retrieval and the scopes granted, some
/// fields are omitted by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub logo: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Notifications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partnered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_connected: Option<bool>,
    #[serde(rename = "type", default)]
    pub user_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Notification preferences attached to a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notifications {
    pub email: bool,
    pub push: bool,
}

/// A Twitch channel record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub mature: bool,
    #[serde(default)]
    pub status: Option<String>,
    pub language: String,
    pub broadcaster_language: String,
    #[serde(default)]
    pub game: Option<String>,
    pub partner: bool,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub video_banner: Option<String>,
    #[serde(default)]
    pub profile_banner: Option<String>,
    #[serde(default)]
    pub profile_banner_background_color: Option<String>,
    pub url: String,
    pub views: u64,
    pub followers: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcaster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's subscription to a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: String,
    pub sub_plan: String,
    pub sub_plan_name: String,
    pub channel: Channel,
    pub created_at: DateTime<Utc>,
}

/// A single follow relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub notifications: bool,
    pub channel: Channel,
    pub created_at: DateTime<Utc>,
}

/// One page of a user's followed channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follows {
    #[serde(rename = "_total")]
    pub total: u64,
    pub follows: Vec<Follow>,
}

/// A block entry on a user's block list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: User,
    pub updated_at: DateTime<Utc>,
}

/// Response shape of the user lookup-by-name endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserList {
    #[serde(rename = "_total")]
    pub total: u64,
    pub users: Vec<User>,
}
