use super::Relationship;
use crate::schema::db;

use indexmap::IndexMap;

/// Binds a domain type to a table.
///
/// Every name in a mapping is either a scalar field (mapped to a column) or
/// a relationship. Mapping a name as one kind replaces an earlier mapping of
/// the same name as the other kind.
#[derive(Debug, Clone)]
pub struct TableMapping {
    table_name: String,

    /// Field holding the primary key
    primary_key: String,

    /// Field name -> column name, in mapping order
    fields: IndexMap<String, String>,

    relationships: IndexMap<String, Relationship>,
}

impl TableMapping {
    /// Creates an empty mapping for `table_name`. The primary key field
    /// defaults to `id`.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            primary_key: "id".to_string(),
            fields: IndexMap::new(),
            relationships: IndexMap::new(),
        }
    }

    /// Maps every column of `table` to a field of the same name and takes the
    /// table's first primary key column as the primary key.
    pub fn from_table(table: &db::Table) -> Self {
        let mut mapping = Self::new(&table.name);

        if let Some(primary_key) = table.primary_key.first() {
            mapping.primary_key = primary_key.clone();
        }

        for column in &table.columns {
            mapping = mapping.map_field(&column.name);
        }

        mapping
    }

    pub fn with_primary_key(mut self, field: impl Into<String>) -> Self {
        self.primary_key = field.into();
        self
    }

    /// Maps `field` to a column of the same name.
    pub fn map_field(self, field: impl Into<String>) -> Self {
        let field = field.into();
        let column = field.clone();
        self.map_field_to(field, column)
    }

    pub fn map_field_to(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        let field = field.into();
        self.relationships.shift_remove(&field);
        self.fields.insert(field, column.into());
        self
    }

    pub fn map_fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fields.into_iter().fold(self, Self::map_field)
    }

    pub fn map_relationship(mut self, relationship: Relationship) -> Self {
        self.fields.shift_remove(&relationship.name);
        self.relationships
            .insert(relationship.name.clone(), relationship);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn primary_key_field(&self) -> &str {
        &self.primary_key
    }

    /// Column mapped to `field`, if `field` is a scalar field.
    pub fn column(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    pub fn is_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn is_relationship(&self, name: &str) -> bool {
        self.relationships.contains_key(name)
    }

    /// Iterates `(field, column)` pairs in mapping order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields
            .iter()
            .map(|(field, column)| (field.as_str(), column.as_str()))
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> + '_ {
        self.relationships.values()
    }
}
