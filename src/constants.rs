/// User agent string used in HTTP requests to identify this client to the catalog API
pub const USER_AGENT: &str = "libawesome-client/0.1.0";
/// API host used when `LIBAWESOME_API_HOST` is not set
pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:8000/api/";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Authorization scheme placed in front of the session token
pub const DEFAULT_AUTH_SCHEME: &str = "Token";
/// Login endpoint, relative to the API host
pub const AUTH_TOKEN_PATH: &str = "auth-token/";
/// Book collection endpoint, relative to the API host
pub const BOOKS_PATH: &str = "books/";
/// Message returned when the login response carries no token
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";
/// Message returned when no outcome was recorded
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
/// Payload of a successful delete in the legacy result shape
pub const DELETE_SUCCESS_MESSAGE: &str = "deleted";
