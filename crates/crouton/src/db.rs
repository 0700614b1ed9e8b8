mod builder;
pub use builder::Builder;

use crate::{engine, Projection, Result, Schema};
use crouton_core::{driver::Driver, stmt::Value};

use std::sync::Arc;

/// Handle for fetching projected object graphs.
///
/// A `Db` pairs a finished [`Schema`] with a data session. Cloning is cheap
/// and clones share both.
#[derive(Debug, Clone)]
pub struct Db {
    pub(crate) schema: Arc<Schema>,
    pub(crate) driver: Arc<dyn Driver>,

    /// Resolve sibling relationships concurrently
    pub(crate) concurrent_relationships: bool,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a handle with default options.
    pub fn new(schema: Schema, driver: impl Driver) -> Db {
        Db {
            schema: Arc::new(schema),
            driver: Arc::new(driver),
            concurrent_relationships: true,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Checks `projection` against this handle's schema without reading any
    /// data.
    pub fn validate(&self, projection: &Projection) -> Result<()> {
        projection.validate(&self.schema)
    }

    /// Fetches the object with primary key `key`, shaped by `projection`.
    ///
    /// The projection is validated first; an invalid projection fails before
    /// the data session sees any operation. Returns `Ok(None)` when no row
    /// has the key. Missing related rows are not errors: a to-one
    /// relationship without a row reads as `Null` and a to-many relationship
    /// without rows as an empty list.
    pub async fn find(
        &self,
        projection: &Projection,
        key: impl Into<Value>,
    ) -> Result<Option<Value>> {
        engine::find(self, projection, key.into()).await
    }
}
