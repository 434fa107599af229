//! OAuth2 authorization-code flow.
//!
//! Builds the provider authorize URL and exchanges authorization codes
//! for access tokens.

use url::Url;

use crate::api::Client;
use crate::{Access, KrakenError};

impl Client {
    /// Build the authorization redirect URL for the given scopes.
    ///
    /// The caller (typically an HTTP handler) issues a 302 to this URL;
    /// scopes are space-joined in input order.
    pub fn authorize_url(&self, scopes: &[&str]) -> Result<Url, KrakenError> {
        let mut url = Url::parse(&format!("{}/oauth2/authorize", self.base()))?;
        url.query_pairs_mut()
            .append_pair("client_id", self.client_id())
            .append_pair("redirect_uri", self.redirect_uri())
            .append_pair("response_type", "code")
            .append_pair("scope", &scopes.join(" "));
        Ok(url)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// The token endpoint takes its parameters as query string with an
    /// empty body; the response body decodes directly into [`Access`].
    pub async fn exchange_code(&self, code: &str) -> Result<Access, KrakenError> {
        let mut url = Url::parse(&format!("{}/oauth2/token", self.base()))?;
        url.query_pairs_mut()
            .append_pair("client_id", self.client_id())
            .append_pair("client_secret", self.secret())
            .append_pair("code", code)
            .append_pair("grant_type", "authorization_code")
            .append_pair("redirect_uri", self.redirect_uri());

        tracing::debug!("exchanging authorization code for access token");
        let resp = self.http().post(url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "token exchange rejected");
            return Err(KrakenError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn test_client() -> Client {
        Client::new(
            "test_client_id",
            "test_secret",
            "http://localhost:8080/authorized",
        )
    }

    #[test]
    fn authorize_url_contains_exactly_the_expected_parameters() {
        let url = test_client()
            .authorize_url(&["openid", "user_read"])
            .unwrap();

        assert!(url.as_str().starts_with("https://api.twitch.tv/kraken/oauth2/authorize"));

        let params: HashMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(params.len(), 4);
        assert_eq!(params["client_id"], "test_client_id");
        assert_eq!(params["redirect_uri"], "http://localhost:8080/authorized");
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["scope"], "openid user_read");
    }

    #[test]
    fn authorize_url_joins_scopes_in_input_order() {
        let url = test_client()
            .authorize_url(&["user_follows_edit", "openid", "user_read"])
            .unwrap();

        let scope = url
            .query_pairs()
            .find(|(k, _)| k == "scope")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(scope, "user_follows_edit openid user_read");
    }

    #[test]
    fn authorize_url_with_no_scopes_has_empty_scope_parameter() {
        let url = test_client().authorize_url(&[]).unwrap();

        let scope = url
            .query_pairs()
            .find(|(k, _)| k == "scope")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(scope, "");
    }
}
