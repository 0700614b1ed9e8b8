use crouton_core::{
    async_trait, bail,
    driver::{Driver, Operation, Response},
    stmt::{Value, ValueRecord},
    Result,
};

use indexmap::IndexMap;
use tokio::sync::RwLock;

/// A data session over tables held in memory.
///
/// Rows are stored as column -> value maps. Keys are matched with
/// [`Value::loose_eq`], so a string key `"100"` finds a row whose key column
/// holds the integer `100`. Columns a row does not have read as `Null`.
#[derive(Debug, Default)]
pub struct Memory {
    tables: RwLock<IndexMap<String, Vec<Row>>>,
}

type Row = IndexMap<String, Value>;

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Creates `table` if it does not exist yet.
    pub async fn create_table(&self, table: impl Into<String>) {
        self.tables.write().await.entry(table.into()).or_default();
    }

    /// Appends a row to `table`, creating the table on first use.
    pub async fn insert<I, K, V>(&self, table: &str, row: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let row = row
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .collect();

        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .push(row);
    }

    /// Number of rows in `table`, `None` if the table does not exist.
    pub async fn len(&self, table: &str) -> Option<usize> {
        self.tables.read().await.get(table).map(Vec::len)
    }
}

#[async_trait]
impl Driver for Memory {
    async fn exec(&self, op: Operation) -> Result<Response> {
        let (table, column, value) = match &op {
            Operation::GetByKey(op) => (&op.table, &op.key_column, &op.key),
            Operation::QueryByForeignKey(op) => (&op.table, &op.column, &op.value),
            Operation::QueryJoinTable(op) => (&op.table, &op.column, &op.value),
        };

        let tables = self.tables.read().await;

        let Some(rows) = tables.get(table) else {
            bail!("table `{table}` does not exist");
        };

        let matched = rows
            .iter()
            .filter(|row| row.get(column).is_some_and(|v| v.loose_eq(value)))
            .map(|row| project(row, op.select()));

        let rows: Vec<_> = if op.is_get_by_key() {
            matched.take(1).collect()
        } else {
            matched.collect()
        };

        tracing::trace!(%table, %column, %value, rows = rows.len(), "memory exec");

        Ok(Response::from_rows(rows))
    }
}

fn project(row: &Row, select: &[String]) -> ValueRecord {
    select
        .iter()
        .map(|column| row.get(column).cloned().unwrap_or_default())
        .collect()
}
