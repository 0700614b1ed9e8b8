use super::Error;
use crate::schema::app::DomainType;

/// Error when a name is used in the wrong position of a projection: a
/// relationship listed as a scalar field, or a scalar field added as a
/// relationship.
///
/// Both directions render the same message. `misused_as` records which one
/// happened.
#[derive(Debug)]
pub(super) struct FieldIsRelationshipError {
    domain: DomainType,
    field: Box<str>,
    misused_as: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Field,
    Relationship,
}

impl std::error::Error for FieldIsRelationshipError {}

impl core::fmt::Display for FieldIsRelationshipError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}.{} must not be a relationship", self.domain, self.field)
    }
}

impl Error {
    /// Creates an error for a mapped relationship projected as a scalar field.
    pub fn field_is_relationship(domain: &DomainType, field: &str) -> Error {
        Error::confused(domain, field, Position::Field)
    }

    /// Creates an error for a mapped scalar field projected as a relationship.
    pub fn relationship_is_field(domain: &DomainType, field: &str) -> Error {
        Error::confused(domain, field, Position::Relationship)
    }

    fn confused(domain: &DomainType, field: &str, misused_as: Position) -> Error {
        Error::from(super::ErrorKind::FieldIsRelationship(
            FieldIsRelationshipError {
                domain: domain.clone(),
                field: field.into(),
                misused_as,
            },
        ))
    }

    /// Returns `true` if this error reports a field/relationship confusion, in
    /// either direction.
    pub fn is_field_is_relationship(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldIsRelationship(_))
    }

    /// Returns `true` if a scalar field was projected as a relationship.
    pub fn is_relationship_is_field(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::FieldIsRelationship(err) if err.misused_as == Position::Relationship
        )
    }
}
