use std::{fmt, sync::Arc};

/// Identifies an application-level record type.
///
/// A domain type is only ever used as a key into the [`Schema`] and as a name
/// in diagnostics. Cloning is cheap.
///
/// [`Schema`]: crate::Schema
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainType(Arc<str>);

impl DomainType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }
}

impl From<&str> for DomainType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DomainType {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&DomainType> for DomainType {
    fn from(src: &DomainType) -> Self {
        src.clone()
    }
}

impl fmt::Debug for DomainType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "DomainType({})", self.0)
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}
