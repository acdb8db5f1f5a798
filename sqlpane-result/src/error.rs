use std::{fmt, io};

use thiserror::Error;

/// Title attached to every [`Error::Connection`].
pub const CONNECTION_ERROR_TITLE: &str = "sqlpane could not connect to your database.";

/// Title attached to every [`Error::Query`].
pub const QUERY_ERROR_TITLE: &str = "sqlpane encountered an error while executing your query.";

/// Unified error type for all sqlpane operations.
///
/// The first two variants are the only ones a host is expected to render for
/// the user; the rest exist so failures on unguarded paths can cross crate
/// boundaries with the `?` operator without being re-titled.
///
/// # Thread Safety
///
/// `Error` implements `Send` and `Sync`, so it can cross the host's
/// background-thread boundary if the host wraps adapter calls that way.
#[derive(Error, Debug)]
pub enum Error {
    /// Engine session construction failed.
    ///
    /// Raised only while opening a connection. Carries the engine's own
    /// message and the fixed [`CONNECTION_ERROR_TITLE`].
    #[error("{title} {message}")]
    Connection {
        /// Fixed human-readable title for the host to display.
        title: &'static str,
        /// The engine's underlying message.
        message: String,
    },

    /// SQL submission or result materialization failed.
    ///
    /// Raised at exactly two points: when a statement is handed to the
    /// engine, and when a cursor materializes its rows. Carries the engine's
    /// own message and the fixed [`QUERY_ERROR_TITLE`]. Parse errors,
    /// missing-table errors, and internal engine faults all arrive here
    /// undistinguished.
    #[error("{title} {message}")]
    Query {
        /// Fixed human-readable title for the host to display.
        title: &'static str,
        /// The engine's underlying message.
        message: String,
    },

    /// A name the engine listed during catalog traversal could not be
    /// resolved back through its metadata API.
    #[error("{0}")]
    Catalog(String),

    /// Error raised by the wrapped engine on a path with no explicit
    /// handling (catalog traversal, completions). Passed through unwrapped.
    #[error("engine error: {0}")]
    Engine(#[from] datafusion::error::DataFusionError),

    /// Arrow error during columnar data handling.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// I/O error, typically from runtime construction.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Wrap a failure at the connect boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlpane_result::Error;
    ///
    /// let err = Error::connection("address already in use");
    /// assert!(matches!(err, Error::Connection { .. }));
    /// ```
    #[inline]
    pub fn connection<E: fmt::Display>(err: E) -> Self {
        Error::Connection {
            title: CONNECTION_ERROR_TITLE,
            message: err.to_string(),
        }
    }

    /// Wrap a failure at the execute/fetch boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlpane_result::{Error, QUERY_ERROR_TITLE};
    ///
    /// let err = Error::query("table 'missing' not found");
    /// assert!(err.to_string().starts_with(QUERY_ERROR_TITLE));
    /// ```
    #[inline]
    pub fn query<E: fmt::Display>(err: E) -> Self {
        Error::Query {
            title: QUERY_ERROR_TITLE,
            message: err.to_string(),
        }
    }
}
