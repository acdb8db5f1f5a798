//! Error types and result definitions for the sqlpane plugin workspace.
//!
//! This crate provides the unified error type ([`Error`]) and result type
//! alias ([`Result<T>`]) used throughout the sqlpane crates. All operations
//! that can fail return `Result<T>`, and errors propagate with the `?`
//! operator until they reach one of the two user-facing boundaries.
//!
//! # Error Philosophy
//!
//! Exactly two error kinds are ever shown to a person driving the host UI:
//!
//! - [`Error::Connection`]: the embedded engine session could not be
//!   constructed.
//! - [`Error::Query`]: SQL submission or result materialization failed.
//!
//! Both carry the engine's own message plus a fixed human-readable title.
//! Nothing is retried and nothing is classified further — a syntax error, a
//! missing table, and an internal engine fault all collapse into
//! [`Error::Query`] at the execute/fetch boundary.
//!
//! Everything else ([`Error::Engine`], [`Error::Arrow`], [`Error::Io`],
//! [`Error::Catalog`]) is a pass-through: failures on paths with no explicit
//! handling (catalog traversal, completions) propagate unwrapped.

pub mod error;
pub mod result;

pub use error::{CONNECTION_ERROR_TITLE, Error, QUERY_ERROR_TITLE};
pub use result::Result;
