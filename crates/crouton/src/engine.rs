mod resolve;

mod select;
use select::Select;

use crate::{Db, Projection, Result};
use crouton_core::{
    driver::{Operation, Response},
    stmt::Value,
};

/// Validates `projection`, then walks it from the row keyed by `key`.
pub(crate) async fn find(db: &Db, projection: &Projection, key: Value) -> Result<Option<Value>> {
    tracing::debug!(domain = %projection.domain(), %key, "fetching projection");

    // No data session call happens for an invalid projection.
    projection.validate(&db.schema)?;

    resolve::find(db, projection, key).await
}

/// Sends one operation to the data session.
async fn exec(db: &Db, op: Operation) -> Result<Response> {
    let table = op.table().to_string();

    let res = db.driver.exec(op).await.map_err(|err| {
        err.context(crouton_core::err!("data session failed reading `{table}`"))
    })?;

    tracing::trace!(table, rows = res.len(), "driver operation");
    Ok(res)
}
