/// A named foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Constraint name
    pub name: String,

    /// Referencing columns, in the owning table
    pub columns: Vec<String>,

    /// Referenced table
    pub target_table: String,

    /// Referenced columns, matched positionally with `columns`
    pub target_columns: Vec<String>,
}

impl ForeignKey {
    pub fn new(
        name: impl Into<String>,
        column: impl Into<String>,
        target_table: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: vec![column.into()],
            target_table: target_table.into(),
            target_columns: vec![target_column.into()],
        }
    }
}
