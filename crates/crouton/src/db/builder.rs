use super::Db;
use crate::{DomainType, Schema, TableMapping};

use crouton_core::{driver::Driver, schema::db};

use std::sync::Arc;

pub struct Builder {
    /// Mappings and table metadata collected so far
    schema: Schema,

    concurrent_relationships: bool,
}

impl Builder {
    /// Maps `domain` to a table. Registering a type again replaces its
    /// mapping.
    pub fn register(&mut self, domain: impl Into<DomainType>, mapping: TableMapping) -> &mut Self {
        self.schema.register_mapping(domain, mapping);
        self
    }

    /// Adds table metadata used to check columns and resolve foreign key
    /// constraint names.
    pub fn table(&mut self, table: db::Table) -> &mut Self {
        self.schema.register_table(table);
        self
    }

    /// Starts from a prebuilt schema, discarding anything registered so far.
    pub fn schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = schema;
        self
    }

    /// Whether sibling relationships of a node are resolved concurrently.
    /// When disabled, relationships are resolved one after another in
    /// projection order. Defaults to `true`.
    pub fn concurrent_relationships(&mut self, enabled: bool) -> &mut Self {
        self.concurrent_relationships = enabled;
        self
    }

    pub fn build(&mut self, driver: impl Driver) -> Db {
        Db {
            schema: Arc::new(self.schema.clone()),
            driver: Arc::new(driver),
            concurrent_relationships: self.concurrent_relationships,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            schema: Schema::new(),
            concurrent_relationships: true,
        }
    }
}
