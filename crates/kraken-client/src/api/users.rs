use super::*;
use crate::KrakenError;

impl AccessClient {
    /// Get the user the access token was issued for.
    pub async fn get_user(&self) -> Result<User, KrakenError> {
        self.validate_scope(crate::SCOPE_USER_READ)?;
        let url = format!("{}/user", self.base());
        self.get(&url).await?.decode()
    }
}

impl Client {
    /// Get a user by user ID.
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, KrakenError> {
        let url = format!("{}/users/{user_id}", self.base());
        self.get(&url).await?.decode()
    }

    /// Look up users by login name (up to 100 names per call).
    ///
    /// Returns basic user information including the ID.
    pub async fn get_users_by_name(&self, names: &[&str]) -> Result<Vec<User>, KrakenError> {
        let joined = names.iter().take(100).copied().collect::<Vec<_>>().join(",");
        let url = format!("{}/users?login={joined}", self.base());
        let list: UserList = self.get(&url).await?.decode()?;
        Ok(list.users)
    }
}
