/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

/// Base URL of the Zendure cloud REST API
pub const ZEN_API_URL: &str = "https://app.zendure.tech/v2";
/// Path of the token endpoint, relative to [`ZEN_API_URL`]
pub const ZEN_AUTH_PATH: &str = "/auth/app/token";
/// Path of the device list endpoint, relative to [`ZEN_API_URL`]
pub const ZEN_DEVICELIST_PATH: &str = "/productModule/device/queryDeviceListByConsumerId";
/// Path of the SolarFlow device details endpoint, relative to [`ZEN_API_URL`]
pub const ZEN_DEVICEDETAILS_PATH: &str = "/device/solarFlow/detail";
/// Placeholder endpoint used by the sample data call
pub const SAMPLE_DATA_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Timeout in seconds applied to every request issued through the wrapper
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Language sent as `Accept-Language` when none is configured
pub const DEFAULT_LANGUAGE: &str = "de-DE";
/// Value held by the client until a token has been retrieved
pub const UNSET_AUTH_TOKEN: &str = "(null)";

/// App version announced to the vendor API
pub const APP_VERSION: &str = "5.0.0";
/// User agent of the official iOS app
pub const USER_AGENT: &str = "Zendure/5.0.0 (iPhone; iOS 17.6.1; Scale/3.00)";
/// Basic credentials of the consumer app, sent as `Authorization`
pub const BASIC_AUTHORIZATION: &str = "Basic Q29uc3VtZXJBcHA6NX4qUmRuTnJATWg0WjEyMw==";

/// Application id sent with the password grant
pub const APP_ID: &str = "121c83f761305d6cf7e";
/// Application type sent with the password grant
pub const APP_TYPE: &str = "iOS";
/// OAuth grant type used for login
pub const GRANT_TYPE: &str = "password";
