//! DataFusion adapter for the sqlpane plugin contract.
//!
//! This crate wires an embedded [`datafusion`] session into the host's
//! [`sqlpane_adapter`] trait seams. The engine owns all the hard parts (SQL
//! parsing, planning, vectorized execution); this crate is the glue that
//! adapts its session API to the operation names the host drives, and maps
//! its Arrow type system into the short display glyphs the host's terminal
//! UI renders.
//!
//! The primary entry points are:
//! - [`DataFusionAdapter`]: configured by the host, opens one session per
//!   connect call.
//! - [`DataFusionConnection`]: executes SQL, walks the engine's metadata
//!   into a [`sqlpane_adapter::Catalog`], and sources editor completions
//!   from the engine's keyword and function registries.
//! - [`DataFusionCursor`]: reports `(name, glyph)` column pairs and
//!   materializes results into a single in-memory batch.
//! - [`display_type`]: the glyph table for Arrow column types.

mod adapter;
mod catalog;
mod completions;
mod types;

pub use adapter::{ADAPTER_NAME, DataFusionAdapter, DataFusionConnection, DataFusionCursor};
pub use types::{UNKNOWN_TYPE_LABEL, display_type};
