//! Host-facing plugin contracts for sqlpane adapters.
//!
//! The host application (a terminal SQL client) drives database plugins
//! through three trait seams:
//!
//! - [`Adapter`]: configured by the host, produces connections.
//! - [`Connection`]: one live engine session; executes SQL and walks
//!   metadata.
//! - [`Cursor`]: one query result handle; reports columns and materializes
//!   rows.
//!
//! Alongside the traits live the data types shuttled across them: the
//! [`Catalog`] tree the host's browser pane renders, and the [`Completion`]
//! items its editor consumes.

pub mod catalog;
pub mod completion;
pub mod traits;

pub use catalog::{Catalog, CatalogItem};
pub use completion::Completion;
pub use traits::{Adapter, Connection, Cursor};
