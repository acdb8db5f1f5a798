use std::collections::HashMap;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatch;
use datafusion::logical_expr::LogicalPlan;
use datafusion::prelude::{DataFrame, SessionConfig, SessionContext};
use sqlpane_adapter::{Adapter, Catalog, Completion, Connection, Cursor};
use sqlpane_result::{Error, Result};
use tokio::runtime::Runtime;

use crate::catalog::build_catalog;
use crate::completions::engine_completions;
use crate::types::display_type;

/// Plugin name the host's discovery mechanism addresses this adapter under.
pub const ADAPTER_NAME: &str = "datafusion";

/// Host-configured entry point producing DataFusion connections.
///
/// Holds the host's positional configuration strings and named options.
/// Neither is currently interpreted; both are logged when a session opens.
pub struct DataFusionAdapter {
    conn_str: Vec<String>,
    options: HashMap<String, String>,
}

impl DataFusionAdapter {
    /// Adapter from the host's positional strings and named options.
    pub fn new(conn_str: Vec<String>, options: HashMap<String, String>) -> Self {
        Self { conn_str, options }
    }
}

impl Adapter for DataFusionAdapter {
    type Connection = DataFusionConnection;

    fn connect(&self) -> Result<DataFusionConnection> {
        DataFusionConnection::open(&self.conn_str, &self.options)
    }
}

/// One embedded engine session plus the runtime that drives it.
///
/// The session and runtime live exactly as long as this value; dropping it
/// releases both. There is no pooling and no reconnect path. The facade is
/// synchronous: every engine call blocks on the owned runtime until the
/// engine returns or fails.
pub struct DataFusionConnection {
    ctx: SessionContext,
    runtime: Arc<Runtime>,
}

impl DataFusionConnection {
    fn open(conn_str: &[String], options: &HashMap<String, String>) -> Result<Self> {
        tracing::debug!(?conn_str, ?options, "opening DataFusion session");
        let runtime = Runtime::new().map_err(Error::connection)?;
        let config = SessionConfig::new().with_information_schema(true);
        let ctx = SessionContext::new_with_config(config);
        Ok(Self {
            ctx,
            runtime: Arc::new(runtime),
        })
    }
}

impl Connection for DataFusionConnection {
    type Cursor = DataFusionCursor;

    fn execute(&self, sql: &str) -> Result<Option<DataFusionCursor>> {
        tracing::debug!(sql, "executing statement");
        let frame = self
            .runtime
            .block_on(self.ctx.sql(sql))
            .map_err(Error::query)?;
        // The engine runs DDL eagerly inside `sql()` and hands back an
        // empty-relation frame: its sentinel for "no rows to display".
        if matches!(frame.logical_plan(), LogicalPlan::EmptyRelation(_)) {
            return Ok(None);
        }
        Ok(Some(DataFusionCursor::new(frame, Arc::clone(&self.runtime))))
    }

    fn get_catalog(&self) -> Result<Catalog> {
        build_catalog(&self.ctx, &self.runtime)
    }

    fn get_completions(&self) -> Vec<Completion> {
        engine_completions(&self.ctx)
    }
}

/// One lazy query result plus an optional row-limit override.
#[derive(Debug)]
pub struct DataFusionCursor {
    frame: DataFrame,
    runtime: Arc<Runtime>,
    limit: Option<usize>,
}

impl DataFusionCursor {
    fn new(frame: DataFrame, runtime: Arc<Runtime>) -> Self {
        Self {
            frame,
            runtime,
            limit: None,
        }
    }
}

impl Cursor for DataFusionCursor {
    fn columns(&self) -> Vec<(String, String)> {
        self.frame
            .schema()
            .fields()
            .iter()
            .map(|field| {
                (
                    field.name().clone(),
                    display_type(field.data_type()).to_string(),
                )
            })
            .collect()
    }

    fn set_limit(&mut self, limit: usize) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    fn fetchall(&mut self) -> Result<RecordBatch> {
        let frame = match self.limit {
            Some(limit) => self
                .frame
                .clone()
                .limit(0, Some(limit))
                .map_err(Error::query)?,
            None => self.frame.clone(),
        };
        let schema = Arc::new(frame.schema().as_arrow().clone());
        let batches = self
            .runtime
            .block_on(frame.collect())
            .map_err(Error::query)?;
        if batches.is_empty() {
            return Ok(RecordBatch::new_empty(schema));
        }
        concat_batches(&batches[0].schema(), &batches).map_err(Error::query)
    }
}
