use reqwest::StatusCode;
use serde::Serialize;

use super::*;
use crate::KrakenError;

impl Client {
    /// List the channels a user follows.
    ///
    /// `limit` and `offset` are passed through to the provider untouched.
    pub async fn get_user_follows(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Follows, KrakenError> {
        let url = format!(
            "{}/users/{user_id}/follows/channels?limit={limit}&offset={offset}",
            self.base()
        );
        self.get(&url).await?.decode()
    }

    /// Check whether a user follows the given channel.
    ///
    /// Returns the follow relationship, or [`KrakenError::NotFollowing`]
    /// when the provider reports no such relationship.
    pub async fn check_user_follows_channel(
        &self,
        user_id: &str,
        channel_id: &str,
    ) -> Result<Follow, KrakenError> {
        let url = format!(
            "{}/users/{user_id}/follows/channels/{channel_id}",
            self.base()
        );
        let resp = self.get(&url).await?;

        if resp.status == StatusCode::NOT_FOUND {
            return Err(KrakenError::NotFollowing {
                user_id: user_id.to_string(),
                channel_id: channel_id.to_string(),
            });
        }

        resp.decode()
    }
}

#[derive(Serialize)]
struct FollowRequest {
    notifications: bool,
}

impl AccessClient {
    /// Follow a channel on behalf of the user.
    pub async fn follow_channel(
        &self,
        user_id: &str,
        channel_id: &str,
        notify: bool,
    ) -> Result<Follow, KrakenError> {
        self.validate_scope(crate::SCOPE_USER_FOLLOWS_EDIT)?;

        let url = format!(
            "{}/users/{user_id}/follows/channels/{channel_id}",
            self.base()
        );
        let resp = self
            .put_json(&url, &FollowRequest {
                notifications: notify,
            })
            .await?;

        if resp.status == StatusCode::UNPROCESSABLE_ENTITY {
            return Err(KrakenError::FollowRejected {
                user_id: user_id.to_string(),
                channel_id: channel_id.to_string(),
            });
        }

        resp.decode()
    }

    /// Stop following a channel on behalf of the user.
    ///
    /// The provider answers 204 on success; anything else is a failure.
    pub async fn unfollow_channel(
        &self,
        user_id: &str,
        channel_id: &str,
    ) -> Result<(), KrakenError> {
        self.validate_scope(crate::SCOPE_USER_FOLLOWS_EDIT)?;

        let url = format!(
            "{}/users/{user_id}/follows/channels/{channel_id}",
            self.base()
        );
        let resp = self.delete(&url).await?;

        if resp.status != StatusCode::NO_CONTENT {
            return Err(KrakenError::UnfollowFailed {
                user_id: user_id.to_string(),
                channel_id: channel_id.to_string(),
            });
        }

        Ok(())
    }
}
