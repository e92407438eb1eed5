/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{APP_ID, APP_TYPE, GRANT_TYPE};
use serde::{Deserialize, Serialize};

/// Body of the password grant sent to the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenRequest<'a> {
    /// Account password
    pub password: &'a str,
    /// Account name, usually the e-mail address
    pub account: &'a str,
    /// Application id of the consumer app
    pub app_id: &'a str,
    /// Application type of the consumer app
    pub app_type: &'a str,
    /// OAuth grant type
    pub grant_type: &'a str,
    /// Tenant, always empty for consumer accounts
    pub tenant_id: &'a str,
}

impl<'a> AuthTokenRequest<'a> {
    /// Password grant for the given credentials
    pub fn new(account: &'a str, password: &'a str) -> Self {
        Self {
            password,
            account,
            app_id: APP_ID,
            app_type: APP_TYPE,
            grant_type: GRANT_TYPE,
            tenant_id: "",
        }
    }
}

/// Body of the title setter call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetTitleRequest<'a> {
    /// New title
    pub title: &'a str,
}
