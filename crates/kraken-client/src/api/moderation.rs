use super::*;
use crate::KrakenError;

impl AccessClient {
    /// Block a user on behalf of `user_id`.
    pub async fn block_user(
        &self,
        user_id: &str,
        target_user_id: &str,
    ) -> Result<Block, KrakenError> {
        self.validate_scope(crate::SCOPE_USER_BLOCKS_EDIT)?;

        let url = format!("{}/users/{user_id}/blocks/{target_user_id}", self.base());
        self.put_empty(&url).await?.decode()
    }
}
