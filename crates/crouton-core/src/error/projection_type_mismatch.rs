use super::Error;
use crate::schema::app::DomainType;

/// Error when a nested projection shapes a different type than the target of
/// the relationship it is attached to.
#[derive(Debug)]
pub(super) struct ProjectionTypeMismatchError {
    domain: DomainType,
    field: Box<str>,
    expected: DomainType,
    actual: DomainType,
}

impl std::error::Error for ProjectionTypeMismatchError {}

impl core::fmt::Display for ProjectionTypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "projection for {}.{} must be of type {}, found {}",
            self.domain, self.field, self.expected, self.actual
        )
    }
}

impl Error {
    pub fn projection_type_mismatch(
        domain: &DomainType,
        field: &str,
        expected: &DomainType,
        actual: &DomainType,
    ) -> Error {
        Error::from(super::ErrorKind::ProjectionTypeMismatch(
            ProjectionTypeMismatchError {
                domain: domain.clone(),
                field: field.into(),
                expected: expected.clone(),
                actual: actual.clone(),
            },
        ))
    }

    pub fn is_projection_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ProjectionTypeMismatch(_))
    }
}
