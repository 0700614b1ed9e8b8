use super::*;

use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct GetByKey {
    /// Which table to get from
    pub table: String,

    /// Primary key column
    pub key_column: String,

    /// Key to fetch
    pub key: stmt::Value,

    /// Which columns to select
    pub select: Vec<String>,
}

impl From<GetByKey> for Operation {
    fn from(value: GetByKey) -> Self {
        Self::GetByKey(value)
    }
}
