use super::{
    app::{DomainType, JoinTable, Link, RelationKind, Relationship, TableMapping},
    Schema,
};
use crate::{Error, Result};

/// A relationship together with everything needed to follow it: the target's
/// mapping and the concrete columns linking the two tables.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRelationship<'a> {
    pub relationship: &'a Relationship,

    /// Mapping of the relationship's target type
    pub target: &'a TableMapping,

    pub via: Via<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via<'a> {
    /// The declaring row holds the target's primary key in `column`.
    ForeignKey {
        column: &'a str,
        target_key: &'a str,
    },

    /// Target rows hold the declaring row's primary key in `column`.
    Inverse { column: &'a str, source_key: &'a str },

    /// Rows of `table` pair `source_column` (declaring primary key) with
    /// `target_column` (target primary key).
    JoinTable {
        table: &'a str,
        source_column: &'a str,
        target_column: &'a str,
        source_key: &'a str,
        target_key: &'a str,
    },
}

impl Schema {
    /// Looks up relationship `name` of `domain` and works out how to follow
    /// it. Fails when the relationship, its target or its pair is unmapped, or
    /// when the linkage does not fit the relationship's kind.
    pub fn resolve_relationship<'a>(
        &'a self,
        domain: &DomainType,
        name: &str,
    ) -> Result<ResolvedRelationship<'a>> {
        let mapping = self.mapping(domain)?;
        let relationship = mapping
            .relationship(name)
            .ok_or_else(|| Error::relationship_not_mapped(domain, name))?;
        let target = self.mapping(&relationship.target)?;

        let via = match (&relationship.link, relationship.kind) {
            (Link::ForeignKey(fk), RelationKind::ManyToOne | RelationKind::OneToOne) => {
                Via::ForeignKey {
                    column: self.foreign_key_column(mapping, fk)?,
                    target_key: self.primary_key_column(&relationship.target)?,
                }
            }
            (Link::JoinTable(join_table), RelationKind::ManyToMany) => {
                self.via_join_table(domain, &relationship.target, join_table, false)?
            }
            (Link::MappedBy(pair_name), kind) => {
                let pair = target.relationship(pair_name).ok_or_else(|| {
                    Error::invalid_schema(format!(
                        "{domain}.{name} is mapped by {}.{pair_name}, which is not a relationship",
                        relationship.target
                    ))
                })?;

                if pair.target != *domain {
                    return Err(Error::invalid_schema(format!(
                        "{domain}.{name} is mapped by {}.{pair_name}, which targets {}",
                        relationship.target, pair.target
                    )));
                }

                match (kind, &pair.link) {
                    (RelationKind::OneToOne | RelationKind::OneToMany, Link::ForeignKey(fk)) => {
                        Via::Inverse {
                            column: self.foreign_key_column(target, fk)?,
                            source_key: self.primary_key_column(domain)?,
                        }
                    }
                    (RelationKind::ManyToMany, Link::JoinTable(join_table)) => {
                        self.via_join_table(domain, &relationship.target, join_table, true)?
                    }
                    (kind, link) => {
                        return Err(Error::invalid_schema(format!(
                            "{domain}.{name} ({kind:?}) cannot be mapped by {}.{pair_name} ({:?}, {})",
                            relationship.target,
                            pair.kind,
                            link_name(link)
                        )))
                    }
                }
            }
            (link, kind) => {
                return Err(Error::invalid_schema(format!(
                    "{domain}.{name} ({kind:?}) cannot be stored as a {}",
                    link_name(link)
                )))
            }
        };

        Ok(ResolvedRelationship {
            relationship,
            target,
            via,
        })
    }

    fn via_join_table<'a>(
        &'a self,
        domain: &DomainType,
        target: &DomainType,
        join_table: &'a JoinTable,
        inverse: bool,
    ) -> Result<Via<'a>> {
        let (source_column, target_column) = if inverse {
            (&join_table.target_column, &join_table.source_column)
        } else {
            (&join_table.source_column, &join_table.target_column)
        };

        Ok(Via::JoinTable {
            table: &join_table.table,
            source_column,
            target_column,
            source_key: self.primary_key_column(domain)?,
            target_key: self.primary_key_column(target)?,
        })
    }

    /// Resolves a foreign key name declared on `mapping`. A name matching a
    /// foreign key constraint in the table's metadata resolves to the
    /// constraint's column, any other name is taken as the column itself.
    fn foreign_key_column<'a>(&'a self, mapping: &TableMapping, fk: &'a str) -> Result<&'a str> {
        let Some(constraint) = self
            .table(mapping.table_name())
            .and_then(|table| table.foreign_key(fk))
        else {
            return Ok(fk);
        };

        match &constraint.columns[..] {
            [column] => Ok(column.as_str()),
            columns => Err(Error::invalid_schema(format!(
                "foreign key `{fk}` on `{}` spans {} columns; only single-column keys are supported",
                mapping.table_name(),
                columns.len()
            ))),
        }
    }
}

fn link_name(link: &Link) -> &'static str {
    match link {
        Link::ForeignKey(_) => "foreign key",
        Link::JoinTable(_) => "join table",
        Link::MappedBy(_) => "mapped-by reference",
    }
}
