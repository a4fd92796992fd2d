//! Application constants
//!
//! Production values for the University of Auckland identity pool and the
//! personalisation API. These only seed [`crate::Config::default`]; runtime
//! code reads endpoints from configuration.

// Cognito identity pool
pub const COGNITO_AUTHORIZE_URL: &str =
    "https://uoapool.auth.ap-southeast-2.amazoncognito.com/oauth2/authorize/";
pub const COGNITO_TOKEN_URL: &str =
    "https://uoapool.auth.ap-southeast-2.amazoncognito.com/oauth2/token";
pub const COGNITO_CLIENT_ID: &str = "tc5hvltsfk72akef7urq0hh72";
pub const COGNITO_REDIRECT_URI: &str = "https://www.auckland.ac.nz/en.html";
pub const COGNITO_STATE: &str = "https://www.auckland.ac.nz/en.html";
pub const COGNITO_SCOPE: &str = "openid profile";

// Personalisation API
pub const TIMETABLE_URL: &str =
    "https://apigw.prod.amazon.auckland.ac.nz/website-personalisation-v1/calendar";

// Shibboleth session marker set once both SSO stages succeed
pub const SSO_SESSION_COOKIE: &str = "shib_idp_session";

// Calendar naming
pub const CALENDAR_TITLE: &str = "Timetable";

// HTTP defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 1;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
