use arrow::record_batch::RecordBatch;
use sqlpane_result::Result;

use crate::catalog::Catalog;
use crate::completion::Completion;

/// Entry point the host uses to obtain connections from a plugin.
///
/// The host constructs one adapter from its positional configuration
/// strings and named options, then calls [`Adapter::connect`] once per UI
/// session.
pub trait Adapter: Send + Sync {
    /// Connection type produced by this adapter.
    type Connection: Connection;

    /// Open the engine session this adapter wraps.
    ///
    /// Construction failure surfaces as a connection error carrying the
    /// engine's message; there is no partially-connected state.
    fn connect(&self) -> Result<Self::Connection>;
}

/// One live engine session, held for the lifetime of the host's UI session.
///
/// Connections are never pooled or reconnected. Dropping the connection
/// releases the underlying session.
pub trait Connection: Send + Sync {
    /// Cursor type produced by [`Connection::execute`].
    type Cursor: Cursor;

    /// Submit `sql` to the engine.
    ///
    /// Returns `Ok(None)` for statements that produce no result rows
    /// (DDL); the host uses this to distinguish "ran successfully, nothing
    /// to display" from "produced a result set". Engine failures surface as
    /// a query error; nothing is retried.
    fn execute(&self, sql: &str) -> Result<Option<Self::Cursor>>;

    /// Materialize the database → schema → table → column tree for the
    /// host's catalog browser. Built fresh on every call; never cached.
    fn get_catalog(&self) -> Result<Catalog>;

    /// Keyword and function completions for the host's editor.
    fn get_completions(&self) -> Vec<Completion>;

    /// Message the host shows once after connecting.
    fn init_message(&self) -> &str {
        ""
    }
}

/// One query result handle plus an optional row-limit override.
pub trait Cursor: Send {
    /// `(name, display label)` pairs, in schema order.
    fn columns(&self) -> Vec<(String, String)>;

    /// Record a maximum row count to request on the next materialization.
    ///
    /// Mutates and returns the same cursor for chaining; callers must not
    /// assume immutability.
    fn set_limit(&mut self, limit: usize) -> &mut Self;

    /// Materialize the full result (or the first `limit` rows, if a limit
    /// was set) into a single in-memory columnar batch.
    ///
    /// Blocks the calling thread until the engine finishes. No streaming,
    /// no partial fetch, no cancellation.
    fn fetchall(&mut self) -> Result<RecordBatch>;
}
