use crate::stmt::ValueRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Matching rows, each aligned with the operation's `select` list
    pub rows: Vec<ValueRecord>,
}

impl Response {
    pub fn from_rows(rows: Vec<ValueRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Takes the first row, dropping any others.
    pub fn into_first(self) -> Option<ValueRecord> {
        self.rows.into_iter().next()
    }
}
