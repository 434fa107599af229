use reqwest::StatusCode;

use super::*;
use crate::KrakenError;

impl AccessClient {
    /// Check whether a user is subscribed to the given channel.
    ///
    /// The provider answers 404 when the user is not subscribed and 422
    /// when the channel has no subscription program; both map to their
    /// own error variants.
    pub async fn get_user_subscription(
        &self,
        user_id: &str,
        channel_id: &str,
    ) -> Result<Subscription, KrakenError> {
        self.validate_scope(crate::SCOPE_USER_SUBSCRIPTIONS)?;

        let url = format!(
            "{}/users/{user_id}/subscriptions/{channel_id}",
            self.base()
        );
        let resp = self.get(&url).await?;

        match resp.status {
            StatusCode::NOT_FOUND => Err(KrakenError::NotSubscribed),
            StatusCode::UNPROCESSABLE_ENTITY => Err(KrakenError::NoSubscriptionProgram),
            _ => resp.decode(),
        }
    }
}
