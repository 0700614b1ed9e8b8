//! Application-level schema: domain types and their table mappings

mod domain;
pub use domain::DomainType;

mod mapping;
pub use mapping::TableMapping;

mod relation;
pub use relation::{JoinTable, Link, RelationKind, Relationship};
