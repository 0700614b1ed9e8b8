use super::*;

use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryByForeignKey {
    /// Table to query
    pub table: String,

    /// Foreign key column to filter on
    pub column: String,

    /// Value the foreign key must equal
    pub value: stmt::Value,

    /// Which columns to get
    pub select: Vec<String>,
}

impl From<QueryByForeignKey> for Operation {
    fn from(value: QueryByForeignKey) -> Self {
        Self::QueryByForeignKey(value)
    }
}
