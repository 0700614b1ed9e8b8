pub mod app;

pub mod db;

mod resolve;
pub use resolve::{ResolvedRelationship, Via};

use crate::{Error, Result};
use app::{DomainType, Relationship, TableMapping};

use indexmap::IndexMap;

/// Registry of table mappings, keyed by domain type, plus optional table
/// metadata keyed by table name.
///
/// The registry is populated during an application's mapping phase and only
/// read once fetching starts.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    mappings: IndexMap<DomainType, TableMapping>,
    tables: IndexMap<String, db::Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the mapping for `domain`, replacing (and returning) any earlier
    /// mapping. Re-mapping a type is allowed and never an error.
    pub fn register_mapping(
        &mut self,
        domain: impl Into<DomainType>,
        mapping: TableMapping,
    ) -> Option<TableMapping> {
        let domain = domain.into();
        let previous = self.mappings.insert(domain.clone(), mapping);

        if previous.is_some() {
            tracing::debug!(%domain, "replaced table mapping");
        }

        previous
    }

    /// Stores metadata for a table, replacing any earlier metadata with the
    /// same name.
    pub fn register_table(&mut self, table: db::Table) -> Option<db::Table> {
        self.tables.insert(table.name.clone(), table)
    }

    pub fn mapping(&self, domain: &DomainType) -> Result<&TableMapping> {
        self.mappings
            .get(domain)
            .ok_or_else(|| Error::not_mapped(domain))
    }

    pub fn is_mapped(&self, domain: &DomainType) -> bool {
        self.mappings.contains_key(domain)
    }

    pub fn mappings(&self) -> impl Iterator<Item = (&DomainType, &TableMapping)> + '_ {
        self.mappings.iter()
    }

    /// Metadata for `table_name`, if it was registered.
    pub fn table(&self, table_name: &str) -> Option<&db::Table> {
        self.tables.get(table_name)
    }

    /// Whether `column` of `table_name` may hold `NULL`. Columns without
    /// registered metadata are assumed nullable.
    pub fn is_nullable(&self, table_name: &str, column: &str) -> bool {
        self.table(table_name)
            .and_then(|table| table.column(column))
            .map_or(true, |column| column.nullable)
    }

    pub fn relationship(&self, domain: &DomainType, name: &str) -> Result<&Relationship> {
        self.mapping(domain)?
            .relationship(name)
            .ok_or_else(|| Error::relationship_not_mapped(domain, name))
    }

    /// Column mapped to the scalar field `name` of `domain`.
    pub fn column(&self, domain: &DomainType, name: &str) -> Result<&str> {
        self.mapping(domain)?
            .column(name)
            .ok_or_else(|| Error::field_not_mapped(domain, name))
    }

    /// Column holding the primary key of `domain`.
    pub fn primary_key_column(&self, domain: &DomainType) -> Result<&str> {
        let mapping = self.mapping(domain)?;
        mapping.column(mapping.primary_key_field()).ok_or_else(|| {
            Error::invalid_schema(format!(
                "primary key field `{}` of {domain} is not mapped to a column",
                mapping.primary_key_field()
            ))
        })
    }
}
