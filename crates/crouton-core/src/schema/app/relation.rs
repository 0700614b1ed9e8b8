use super::DomainType;

/// Cardinality of a relationship, seen from the type that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    /// Returns true if the relationship resolves to a list.
    pub fn is_to_many(self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

/// How a relationship is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// The declaring table holds the target's primary key. The name is either
    /// a column, or a foreign key constraint of the declaring table when table
    /// metadata is registered.
    ForeignKey(String),

    /// A join table pairs the declaring and target primary keys.
    JoinTable(JoinTable),

    /// The named relationship on the target type owns the storage.
    MappedBy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTable {
    /// Name of the join table
    pub table: String,

    /// Column referencing the declaring type's primary key
    pub source_column: String,

    /// Column referencing the target type's primary key
    pub target_column: String,
}

impl JoinTable {
    pub fn new(
        table: impl Into<String>,
        source_column: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            source_column: source_column.into(),
            target_column: target_column.into(),
        }
    }
}

/// One relationship edge of a table mapping.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Field on the declaring type holding the relationship
    pub name: String,

    pub kind: RelationKind,

    /// Type on the other end of the relationship
    pub target: DomainType,

    /// Inverse field on the target, for bidirectional navigation
    pub target_field: Option<String>,

    pub link: Link,
}

impl Relationship {
    /// Many rows of the declaring table reference one target row through
    /// `foreign_key`.
    pub fn many_to_one(
        name: impl Into<String>,
        target: impl Into<DomainType>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            RelationKind::ManyToOne,
            target,
            Link::ForeignKey(foreign_key.into()),
        )
    }

    /// Owning side of a one-to-one relationship: the declaring table holds
    /// the target's key in `foreign_key`.
    pub fn one_to_one(
        name: impl Into<String>,
        target: impl Into<DomainType>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            RelationKind::OneToOne,
            target,
            Link::ForeignKey(foreign_key.into()),
        )
    }

    /// Inverse side of a one-to-one relationship owned by `target_field`.
    pub fn one_to_one_mapped_by(
        name: impl Into<String>,
        target: impl Into<DomainType>,
        target_field: impl Into<String>,
    ) -> Self {
        Self::mapped_by(name, RelationKind::OneToOne, target, target_field)
    }

    /// One declaring row is referenced by many target rows through the
    /// foreign key of `target_field`.
    pub fn one_to_many(
        name: impl Into<String>,
        target: impl Into<DomainType>,
        target_field: impl Into<String>,
    ) -> Self {
        Self::mapped_by(name, RelationKind::OneToMany, target, target_field)
    }

    /// Owning side of a many-to-many relationship stored in `join_table`.
    pub fn many_to_many(
        name: impl Into<String>,
        target: impl Into<DomainType>,
        join_table: JoinTable,
    ) -> Self {
        Self::new(
            name,
            RelationKind::ManyToMany,
            target,
            Link::JoinTable(join_table),
        )
    }

    /// Inverse side of a many-to-many relationship owned by `target_field`.
    pub fn many_to_many_mapped_by(
        name: impl Into<String>,
        target: impl Into<DomainType>,
        target_field: impl Into<String>,
    ) -> Self {
        Self::mapped_by(name, RelationKind::ManyToMany, target, target_field)
    }

    /// Records the inverse field on the target of an owning relationship.
    pub fn with_target_field(mut self, target_field: impl Into<String>) -> Self {
        self.target_field = Some(target_field.into());
        self
    }

    fn new(
        name: impl Into<String>,
        kind: RelationKind,
        target: impl Into<DomainType>,
        link: Link,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            target_field: None,
            link,
        }
    }

    fn mapped_by(
        name: impl Into<String>,
        kind: RelationKind,
        target: impl Into<DomainType>,
        target_field: impl Into<String>,
    ) -> Self {
        let target_field = target_field.into();
        let mut relationship = Self::new(name, kind, target, Link::MappedBy(target_field.clone()));
        relationship.target_field = Some(target_field);
        relationship
    }

    /// Returns true if the declaring side stores the relationship.
    pub fn is_owning(&self) -> bool {
        !matches!(self.link, Link::MappedBy(_))
    }
}
