mod get_by_key;
pub use get_by_key::GetByKey;

mod query_by_foreign_key;
pub use query_by_foreign_key::QueryByForeignKey;

mod query_join_table;
pub use query_join_table::QueryJoinTable;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Get at most one row by its primary key
    GetByKey(GetByKey),

    /// Get every row whose foreign key column equals a value
    QueryByForeignKey(QueryByForeignKey),

    /// Get the join table rows referencing a key
    QueryJoinTable(QueryJoinTable),
}

impl Operation {
    /// Table the operation reads from
    pub fn table(&self) -> &str {
        match self {
            Self::GetByKey(op) => &op.table,
            Self::QueryByForeignKey(op) => &op.table,
            Self::QueryJoinTable(op) => &op.table,
        }
    }

    /// Columns each returned row is aligned with
    pub fn select(&self) -> &[String] {
        match self {
            Self::GetByKey(op) => &op.select,
            Self::QueryByForeignKey(op) => &op.select,
            Self::QueryJoinTable(op) => &op.select,
        }
    }

    pub fn is_get_by_key(&self) -> bool {
        matches!(self, Self::GetByKey(_))
    }

    pub fn is_query_by_foreign_key(&self) -> bool {
        matches!(self, Self::QueryByForeignKey(_))
    }

    pub fn is_query_join_table(&self) -> bool {
        matches!(self, Self::QueryJoinTable(_))
    }
}
