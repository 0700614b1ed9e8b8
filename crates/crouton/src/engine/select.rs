use crate::{Projection, Result, Schema};
use crouton_core::{
    schema::Via,
    stmt::{Value, ValueRecord},
};

use indexmap::IndexSet;

/// Columns read for one node of a projection.
///
/// Always starts with the primary key column, then the columns of projected
/// fields, then the foreign key columns needed to follow owning to-one
/// relationships. Each column appears once.
#[derive(Debug)]
pub(crate) struct Select<'a> {
    pub(crate) table: &'a str,
    pub(crate) key_column: &'a str,
    columns: IndexSet<&'a str>,
}

impl<'a> Select<'a> {
    pub(crate) fn new(schema: &'a Schema, projection: &Projection) -> Result<Select<'a>> {
        let domain = projection.domain();
        let mapping = schema.mapping(domain)?;
        let key_column = schema.primary_key_column(domain)?;

        let mut columns = IndexSet::new();
        columns.insert(key_column);

        for field in projection.fields() {
            columns.insert(schema.column(domain, field)?);
        }

        for (name, _) in projection.relationships() {
            if let Via::ForeignKey { column, .. } = schema.resolve_relationship(domain, name)?.via {
                columns.insert(column);
            }
        }

        Ok(Select {
            table: mapping.table_name(),
            key_column,
            columns,
        })
    }

    pub(crate) fn columns(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.to_string()).collect()
    }

    /// Value of `column` in a row returned for this select. Columns the row
    /// does not carry read as `Null`.
    pub(crate) fn get(&self, row: &ValueRecord, column: &str) -> Value {
        self.columns
            .get_index_of(column)
            .and_then(|index| row.get(index))
            .cloned()
            .unwrap_or_default()
    }
}
