use super::Error;
use crate::schema::app::DomainType;

/// Error when a projection's relationship graph revisits a domain type that
/// is already on the current root-to-node path.
#[derive(Debug)]
pub(super) struct RecursiveProjectionError {
    domain: DomainType,
    path: Vec<DomainType>,
}

impl std::error::Error for RecursiveProjectionError {}

impl core::fmt::Display for RecursiveProjectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Recursive projection for {} (path: ", self.domain)?;
        for domain in &self.path {
            write!(f, "{domain} -> ")?;
        }
        write!(f, "{})", self.domain)
    }
}

impl Error {
    /// Creates a recursive projection error. `path` lists the domain types
    /// from the root down to the node whose child closes the cycle.
    pub fn recursive_projection(domain: &DomainType, path: &[DomainType]) -> Error {
        Error::from(super::ErrorKind::RecursiveProjection(
            RecursiveProjectionError {
                domain: domain.clone(),
                path: path.to_vec(),
            },
        ))
    }

    /// Returns `true` if this error reports a recursive projection.
    pub fn is_recursive_projection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecursiveProjection(_))
    }
}
