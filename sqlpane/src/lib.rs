//! sqlpane: terminal SQL client plumbing for embedded DataFusion.
//!
//! This crate is the primary entrypoint for the sqlpane plugin workspace.
//! It re-exports the host-facing contracts and the DataFusion adapter from
//! the underlying `sqlpane-*` crates, providing a unified API surface.
//!
//! # Quick Start
//!
//! Open a session and run a query:
//!
//! ```rust
//! use std::collections::HashMap;
//! use sqlpane::{Adapter, Connection, Cursor, DataFusionAdapter};
//!
//! let adapter = DataFusionAdapter::new(Vec::new(), HashMap::new());
//! let connection = adapter.connect().unwrap();
//! let mut cursor = connection.execute("SELECT 1 AS a").unwrap().unwrap();
//! assert_eq!(cursor.columns(), vec![("a".to_string(), "##".to_string())]);
//! ```
//!
//! # Architecture
//!
//! The workspace is layered the same way the host drives it:
//!
//! - **Contracts** (`sqlpane-adapter`): the `Adapter`/`Connection`/`Cursor`
//!   trait seams plus the catalog and completion data types.
//! - **Engine glue** (`sqlpane-fusion`): the DataFusion session facade,
//!   catalog builder, and display type mapping.
//! - **Errors** (`sqlpane-result`): the unified `Error` type with its two
//!   user-facing kinds.

pub use sqlpane_adapter::{Adapter, Catalog, CatalogItem, Completion, Connection, Cursor};
pub use sqlpane_fusion::{
    ADAPTER_NAME, DataFusionAdapter, DataFusionConnection, DataFusionCursor, display_type,
};
pub use sqlpane_result::{Error, Result};
