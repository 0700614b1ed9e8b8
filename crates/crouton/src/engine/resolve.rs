use super::{exec, Select};
use crate::{Db, Projection, Result};
use crouton_core::{
    driver::operation,
    schema::{ResolvedRelationship, Via},
    stmt::{Value, ValueObject, ValueRecord},
};

use async_recursion::async_recursion;
use futures::future;

/// Reads the row keyed by `key` and materializes it. `Ok(None)` when there is
/// no such row.
pub(super) async fn find(db: &Db, projection: &Projection, key: Value) -> Result<Option<Value>> {
    if key.is_null() {
        return Ok(None);
    }

    let select = Select::new(&db.schema, projection)?;

    let op = operation::GetByKey {
        table: select.table.to_string(),
        key_column: select.key_column.to_string(),
        key,
        select: select.columns(),
    };

    let Some(row) = exec(db, op.into()).await?.into_first() else {
        return Ok(None);
    };

    materialize(db, projection, &select, row).await.map(Some)
}

/// Builds the object for one row: projected fields first, then every
/// projected relationship.
#[async_recursion]
async fn materialize<'a>(
    db: &'a Db,
    projection: &'a Projection,
    select: &'a Select<'a>,
    row: ValueRecord,
) -> Result<Value> {
    let domain = projection.domain();
    let mut object =
        ValueObject::with_capacity(projection.fields().len() + projection.relationships().len());

    for field in projection.fields() {
        let column = db.schema.column(domain, field)?;
        object.insert(field.to_string(), select.get(&row, column));
    }

    let mut pending = Vec::with_capacity(projection.relationships().len());

    for (name, child) in projection.relationships() {
        let resolved = db.schema.resolve_relationship(domain, name)?;

        let source = match resolved.via {
            Via::ForeignKey { column, .. } => {
                let value = select.get(&row, column);

                if value.is_null() && !db.schema.is_nullable(select.table, column) {
                    tracing::warn!(
                        relationship = %resolved.relationship.name,
                        table = select.table,
                        column,
                        "null in a non-nullable foreign key column"
                    );
                }

                value
            }
            Via::Inverse { source_key, .. } | Via::JoinTable { source_key, .. } => {
                select.get(&row, source_key)
            }
        };

        pending.push(relationship(db, resolved, child, source));
    }

    let names = projection.relationships().map(|(name, _)| name);

    let values = if db.concurrent_relationships {
        future::try_join_all(pending).await?
    } else {
        let mut values = Vec::with_capacity(pending.len());
        for relationship in pending {
            values.push(relationship.await?);
        }
        values
    };

    for (name, value) in names.zip(values) {
        object.insert(name.to_string(), value);
    }

    Ok(object.into())
}

/// Resolves one relationship of a node. `source` is the foreign key value for
/// an owning to-one relationship and the node's primary key otherwise.
async fn relationship(
    db: &Db,
    resolved: ResolvedRelationship<'_>,
    projection: &Projection,
    source: Value,
) -> Result<Value> {
    match resolved.via {
        Via::ForeignKey { .. } => Ok(find(db, projection, source).await?.unwrap_or_default()),
        Via::Inverse { column, .. } => {
            if source.is_null() {
                return Ok(empty(resolved));
            }

            let select = Select::new(&db.schema, projection)?;

            let op = operation::QueryByForeignKey {
                table: select.table.to_string(),
                column: column.to_string(),
                value: source,
                select: select.columns(),
            };

            let res = exec(db, op.into()).await?;

            if resolved.relationship.kind.is_to_many() {
                let mut items = Vec::with_capacity(res.len());
                for row in res.rows {
                    items.push(materialize(db, projection, &select, row).await?);
                }
                return Ok(Value::List(items));
            }

            if res.len() > 1 {
                tracing::warn!(
                    relationship = %resolved.relationship.name,
                    table = select.table,
                    column,
                    rows = res.len(),
                    "one-to-one relationship matched several rows; using the first"
                );
            }

            match res.into_first() {
                Some(row) => materialize(db, projection, &select, row).await,
                None => Ok(Value::Null),
            }
        }
        Via::JoinTable {
            table,
            source_column,
            target_column,
            ..
        } => {
            if source.is_null() {
                return Ok(empty(resolved));
            }

            let op = operation::QueryJoinTable {
                table: table.to_string(),
                column: source_column.to_string(),
                value: source,
                select: vec![target_column.to_string()],
            };

            let res = exec(db, op.into()).await?;

            let mut items = Vec::with_capacity(res.len());
            for row in res.rows {
                let key = row.first().cloned().unwrap_or_default();

                // Join rows pointing at a missing target are skipped
                if let Some(item) = find(db, projection, key).await? {
                    items.push(item);
                }
            }

            Ok(Value::List(items))
        }
    }
}

fn empty(resolved: ResolvedRelationship<'_>) -> Value {
    if resolved.relationship.kind.is_to_many() {
        Value::List(vec![])
    } else {
        Value::Null
    }
}
