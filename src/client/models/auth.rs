//! OAuth models

use serde::Serialize;

/// Body posted to `/login/oauth/access_token`
#[derive(Debug, Clone, Serialize)]
pub struct OAuthCodeExchange<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
}
