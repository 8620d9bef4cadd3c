//! Fixed user facing text.

pub const EMPTY_EMAIL: &str = "Please enter a valid email address.";
pub const SERVER_UNREACHABLE: &str = "Error connecting to server.";
pub const REQUEST_FAILED: &str = "Error submitting request.";
pub const MONITORED_STOCKS_FAILED: &str = "Failed to load monitored stocks.";
pub const NOT_AVAILABLE: &str = "N/A";
