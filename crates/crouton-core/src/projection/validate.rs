use super::Projection;
use crate::{schema::app::DomainType, Error, Result, Schema};

/// Checks `projection` against `schema` without touching any data.
///
/// Walks the projection depth-first and fails on the first of:
/// - an unmapped domain type (the root or a relationship target),
/// - a field that is not mapped, or that is a relationship,
/// - a relationship that is not mapped, or that is a scalar field,
/// - a relationship whose linkage is inconsistent with its pair,
/// - a nested projection of a type other than the relationship's target,
/// - a nested projection whose type is already on the path from the root.
///
/// The same type may appear in sibling branches.
pub fn validate(schema: &Schema, projection: &Projection) -> Result<()> {
    let mut validate = Validate {
        schema,
        path: vec![],
    };

    validate.visit(projection).inspect_err(|err| {
        tracing::debug!(domain = %projection.domain(), error = %err, "projection rejected");
    })
}

struct Validate<'a> {
    schema: &'a Schema,

    /// Domain types from the root down to the projection being visited
    path: Vec<DomainType>,
}

impl Validate<'_> {
    fn visit(&mut self, projection: &Projection) -> Result<()> {
        let domain = projection.domain();
        let mapping = self.schema.mapping(domain)?;
        let table = self.schema.table(mapping.table_name());

        for field in projection.fields() {
            let Some(column) = mapping.column(field) else {
                if mapping.is_relationship(field) {
                    return Err(Error::field_is_relationship(domain, field));
                }
                return Err(Error::field_not_mapped(domain, field));
            };

            if let Some(table) = table {
                if table.column(column).is_none() {
                    return Err(Error::invalid_schema(format!(
                        "column `{column}` of {domain}.{field} does not exist in table `{}`",
                        table.name
                    )));
                }
            }
        }

        self.path.push(domain.clone());

        for (name, child) in projection.relationships() {
            if !mapping.is_relationship(name) {
                if mapping.is_field(name) {
                    return Err(Error::relationship_is_field(domain, name));
                }
                return Err(Error::relationship_not_mapped(domain, name));
            }

            let resolved = self.schema.resolve_relationship(domain, name)?;
            let target = &resolved.relationship.target;

            if child.domain() != target {
                return Err(Error::projection_type_mismatch(
                    domain,
                    name,
                    target,
                    child.domain(),
                ));
            }

            if self.path.contains(target) {
                return Err(Error::recursive_projection(target, &self.path));
            }

            self.visit(child)?;
        }

        self.path.pop();
        Ok(())
    }
}
