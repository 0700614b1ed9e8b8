use super::Error;
use crate::schema::app::DomainType;

/// Error when a projected relationship name has no relationship mapping on
/// its type.
#[derive(Debug)]
pub(super) struct RelationshipNotMappedError {
    domain: DomainType,
    field: Box<str>,
}

impl std::error::Error for RelationshipNotMappedError {}

impl core::fmt::Display for RelationshipNotMappedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "relationship {}.{} is not mapped", self.domain, self.field)
    }
}

impl Error {
    /// Creates an error for a relationship that is not mapped on `domain`.
    pub fn relationship_not_mapped(domain: &DomainType, field: &str) -> Error {
        Error::from(super::ErrorKind::RelationshipNotMapped(
            RelationshipNotMappedError {
                domain: domain.clone(),
                field: field.into(),
            },
        ))
    }

    /// Returns `true` if this error reports an unmapped relationship.
    pub fn is_relationship_not_mapped(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RelationshipNotMapped(_))
    }
}
