use super::Error;
use crate::schema::app::DomainType;

/// Error when a projected field name has no field mapping on its type.
#[derive(Debug)]
pub(super) struct FieldNotMappedError {
    domain: DomainType,
    field: Box<str>,
}

impl std::error::Error for FieldNotMappedError {}

impl core::fmt::Display for FieldNotMappedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}.{} is not mapped", self.domain, self.field)
    }
}

impl Error {
    /// Creates an error for a field that is not mapped on `domain`.
    pub fn field_not_mapped(domain: &DomainType, field: &str) -> Error {
        Error::from(super::ErrorKind::FieldNotMapped(FieldNotMappedError {
            domain: domain.clone(),
            field: field.into(),
        }))
    }

    /// Returns `true` if this error reports an unmapped field.
    pub fn is_field_not_mapped(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldNotMapped(_))
    }
}
