/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response of the token endpoint
///
/// Only the access token is of interest. Missing or null fields decode as
/// `None` so a malformed answer ends up as "no token received" rather than a
/// hard error.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthTokenResponse {
    /// Payload of the answer
    #[serde(default)]
    pub data: Option<AuthTokenData>,
}

/// Payload of [`AuthTokenResponse`]
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenData {
    /// Bearer token for subsequent requests
    #[serde(default)]
    pub access_token: Option<String>,
}

impl AuthTokenResponse {
    /// The received token, if it is not empty
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.access_token.as_deref())
            .filter(|token| !token.is_empty())
    }
}
