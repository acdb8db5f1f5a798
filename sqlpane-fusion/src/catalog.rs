//! Walks the engine's live metadata into the host's catalog tree.
//!
//! One metadata round-trip per schema/table; no batching. Catalogs a host
//! browses are small, and the tree is rebuilt on every request rather than
//! cached.

use std::sync::Arc;

use arrow::array::Array;
use arrow::array::StringArray;
use datafusion::catalog::{CatalogProvider, SchemaProvider};
use datafusion::datasource::{TableProvider, TableType};
use datafusion::prelude::SessionContext;
use sqlpane_adapter::catalog::{Catalog, CatalogItem, qualify, quote_ident};
use sqlpane_result::{Error, Result};
use tokio::runtime::Runtime;

use crate::types::display_type;

const LIST_DATABASES_SQL: &str = "SELECT DISTINCT table_catalog FROM information_schema.tables";

/// Materialize the database → schema → table → column tree from a live
/// session.
///
/// Ordering is whatever the engine returns; nothing is sorted. Engine
/// errors propagate unwrapped ([`Error::Engine`]); a name the engine listed
/// but cannot resolve surfaces as [`Error::Catalog`].
pub(crate) fn build_catalog(ctx: &SessionContext, runtime: &Runtime) -> Result<Catalog> {
    tracing::debug!("building catalog tree");
    let mut items = Vec::new();
    for db_name in list_databases(ctx, runtime)? {
        let database = ctx
            .catalog(&db_name)
            .ok_or_else(|| Error::Catalog(format!("database {db_name} is not registered")))?;
        items.push(database_item(runtime, &db_name, database)?);
    }
    Ok(Catalog::new(items))
}

/// Distinct catalog names, from the engine's information-schema view.
fn list_databases(ctx: &SessionContext, runtime: &Runtime) -> Result<Vec<String>> {
    let frame = runtime.block_on(ctx.sql(LIST_DATABASES_SQL))?;
    let batches = runtime.block_on(frame.collect())?;
    let mut names = Vec::new();
    for batch in &batches {
        let column = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| {
                Error::Catalog("table_catalog column is not a string column".to_string())
            })?;
        for row in 0..column.len() {
            if !column.is_null(row) {
                names.push(column.value(row).to_string());
            }
        }
    }
    Ok(names)
}

fn database_item(
    runtime: &Runtime,
    db_name: &str,
    database: Arc<dyn CatalogProvider>,
) -> Result<CatalogItem> {
    let mut children = Vec::new();
    for schema_name in database.schema_names() {
        let schema = database.schema(&schema_name).ok_or_else(|| {
            Error::Catalog(format!("schema {schema_name} is not registered in {db_name}"))
        })?;
        children.push(schema_item(runtime, db_name, &schema_name, schema)?);
    }
    Ok(CatalogItem::with_children(
        quote_ident(db_name),
        quote_ident(db_name),
        db_name,
        "db",
        children,
    ))
}

fn schema_item(
    runtime: &Runtime,
    db_name: &str,
    schema_name: &str,
    schema: Arc<dyn SchemaProvider>,
) -> Result<CatalogItem> {
    let mut children = Vec::new();
    for table_name in schema.table_names() {
        let table = runtime
            .block_on(schema.table(&table_name))?
            .ok_or_else(|| {
                Error::Catalog(format!(
                    "table {table_name} is not registered in {schema_name}"
                ))
            })?;
        children.push(table_item(db_name, schema_name, &table_name, table));
    }
    let qualified = qualify(&[db_name, schema_name]);
    Ok(CatalogItem::with_children(
        qualified.clone(),
        qualified,
        schema_name,
        "s",
        children,
    ))
}

fn table_item(
    db_name: &str,
    schema_name: &str,
    table_name: &str,
    table: Arc<dyn TableProvider>,
) -> CatalogItem {
    let columns = table
        .schema()
        .fields()
        .iter()
        .map(|field| {
            CatalogItem::leaf(
                qualify(&[db_name, schema_name, table_name, field.name()]),
                quote_ident(field.name()),
                field.name().clone(),
                display_type(field.data_type()),
            )
        })
        .collect();
    let qualified = qualify(&[db_name, schema_name, table_name]);
    CatalogItem::with_children(
        qualified.clone(),
        qualified,
        table_name,
        kind_label(table.table_type()),
        columns,
    )
}

/// Short kind label for a relation.
fn kind_label(table_type: TableType) -> &'static str {
    match table_type {
        TableType::Base => "t",
        TableType::View => "v",
        TableType::Temporary => "tmp",
    }
}
