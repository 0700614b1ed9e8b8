mod validate;
pub use validate::validate;

use crate::{schema::app::DomainType, Result, Schema};

use indexmap::{IndexMap, IndexSet};

/// The shape of a fetch: which scalar fields of a domain type to read and
/// which relationships to follow, each with its own nested projection.
///
/// A projection is built incrementally and may be changed at any time,
/// including after it was used in a fetch; the next fetch reads the current
/// shape. It is only checked against a [`Schema`] when used (see
/// [`validate`]), so a projection over a type that is not mapped yet can be
/// built freely.
///
/// ```
/// use crouton_core::Projection;
///
/// let item = Projection::new("Item").with_fields(["id", "description"]);
/// let line_items = Projection::new("LineItem")
///     .with_fields(["line", "quantity", "itemid"])
///     .with_relationship("item", item);
///
/// let mut cart = Projection::new("ShoppingCart").with_fields(["id"]);
/// cart.add_relationship("lineItems", line_items);
///
/// assert_eq!(cart.relationships().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    domain: DomainType,

    /// Scalar fields, in insertion order
    fields: IndexSet<String>,

    /// Relationship name -> nested projection, in insertion order
    relationships: IndexMap<String, Projection>,
}

impl Projection {
    pub fn new(domain: impl Into<DomainType>) -> Self {
        Self {
            domain: domain.into(),
            fields: IndexSet::new(),
            relationships: IndexMap::new(),
        }
    }

    /// The domain type this projection shapes
    pub fn domain(&self) -> &DomainType {
        &self.domain
    }

    /// Adds a scalar field. Adding a field twice has no effect.
    pub fn add_field(&mut self, name: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into());
        self
    }

    pub fn add_fields<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds a relationship shaped by `projection`, replacing any projection
    /// previously added under `name` (the relationship keeps its position).
    pub fn add_relationship(&mut self, name: impl Into<String>, projection: Projection) -> &mut Self {
        self.relationships.insert(name.into(), projection);
        self
    }

    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_fields(names);
        self
    }

    pub fn with_relationship(mut self, name: impl Into<String>, projection: Projection) -> Self {
        self.add_relationship(name, projection);
        self
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.iter().map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    pub fn relationships(&self) -> impl ExactSizeIterator<Item = (&str, &Projection)> + '_ {
        self.relationships
            .iter()
            .map(|(name, projection)| (name.as_str(), projection))
    }

    pub fn relationship(&self, name: &str) -> Option<&Projection> {
        self.relationships.get(name)
    }

    /// Nested projection for `name`, for changing it in place.
    pub fn relationship_mut(&mut self, name: &str) -> Option<&mut Projection> {
        self.relationships.get_mut(name)
    }

    /// Checks the projection against `schema`. See [`validate`].
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        validate(schema, self)
    }
}
