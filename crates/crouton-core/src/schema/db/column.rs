#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Name of the column in the table
    pub name: String,

    /// True if the column can contain `NULL`
    pub nullable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
