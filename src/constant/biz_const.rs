/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// session keys
pub const SESSION_USER: &str = "user";

/// well-known pages
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PREFIX: &str = "/dashboard";

/// role selected before the user touches the selector
pub const DEFAULT_ROLE: &str = "patient";
