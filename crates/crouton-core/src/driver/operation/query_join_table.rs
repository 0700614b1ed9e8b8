use super::*;

use crate::stmt;

/// Reads a many-to-many join table. The returned rows are join rows; the
/// resolver follows each one to the target table with a [`GetByKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryJoinTable {
    /// Join table to query
    pub table: String,

    /// Column referencing the declaring side's primary key
    pub column: String,

    /// Primary key of the declaring row
    pub value: stmt::Value,

    /// Which columns to get, usually the column referencing the other side
    pub select: Vec<String>,
}

impl From<QueryJoinTable> for Operation {
    fn from(value: QueryJoinTable) -> Self {
        Self::QueryJoinTable(value)
    }
}
