//! Application constants

/// Backend base URL.
pub const API_BASE: &str = "https://api.berich.oups.net";

/// localStorage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// OAuth client id used by the Google identity widget.
pub const GOOGLE_CLIENT_ID: &str =
    "156580473624-avdc8usdprcdv0h31hahk6sg0ipmcqn1.apps.googleusercontent.com";

// UI delays
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 1500;
pub const AUTH_REDIRECT_DELAY_MS: u32 = 1500;
pub const STATUS_RESET_DELAY_MS: u32 = 2000;
pub const ERROR_CLEAR_DELAY_MS: u32 = 3000;
