use crate::error::Error;

/// Result type alias used throughout the sqlpane workspace.
///
/// This is a type alias for `std::result::Result<T, Error>`, providing a
/// convenient shorthand for functions that return sqlpane errors.
pub type Result<T> = std::result::Result<T, Error>;
