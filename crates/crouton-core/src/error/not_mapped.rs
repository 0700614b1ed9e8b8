use super::Error;
use crate::schema::app::DomainType;

/// Error when a domain type was never registered with a table mapping.
///
/// Raised by schema lookups and, through them, by projection validation when
/// the projection's root or a relationship target is unmapped.
#[derive(Debug)]
pub(super) struct NotMappedError {
    domain: DomainType,
}

impl std::error::Error for NotMappedError {}

impl core::fmt::Display for NotMappedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unmapped domain object: constructor for {} has no table mapping",
            self.domain
        )
    }
}

impl Error {
    /// Creates an error for a domain type without a table mapping.
    pub fn not_mapped(domain: &DomainType) -> Error {
        Error::from(super::ErrorKind::NotMapped(NotMappedError {
            domain: domain.clone(),
        }))
    }

    /// Returns `true` if this error reports an unmapped domain type.
    pub fn is_not_mapped(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotMapped(_))
    }
}
