//! Compare two object graphs through a projection.
//!
//! The verifier walks an expected and an actual graph in lock step, guided by
//! the projection that produced them, and reports every difference it finds
//! rather than stopping at the first.

use crate::{DomainType, Projection, Schema, Value};

use indexmap::IndexMap;
use std::{collections::VecDeque, fmt};

/// One difference between the expected and the actual graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Location in the graph, e.g. `Customer.shoppingCart.lineItems[1]`
    pub path: String,

    /// Domain type of the node holding the difference
    pub domain: DomainType,

    /// Field or relationship that differs. `None` when the node itself is
    /// missing on one side.
    pub field: Option<String>,

    pub message: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{field}: {}", self.path, self.message),
            None => write!(f, "{}: {}", self.path, self.message),
        }
    }
}

/// Compares graphs using sort keys for to-many relationships.
///
/// Lists are sorted on both sides before elements are paired. The sort key of
/// a list of `T` is, in order: the field given with [`Verifier::sort_by`]
/// for `T`, `T`'s primary key field when it is projected, the first projected
/// field. Lists whose projection has no fields keep their order.
#[derive(Debug)]
pub struct Verifier<'a> {
    schema: &'a Schema,
    sort_keys: IndexMap<DomainType, String>,
}

struct Pending<'a> {
    path: String,
    projection: &'a Projection,
    expected: &'a Value,
    actual: &'a Value,
}

/// Compares `expected` with `actual` through `projection` using default sort
/// keys.
pub fn verify(
    schema: &Schema,
    projection: &Projection,
    expected: &Value,
    actual: &Value,
) -> Vec<Mismatch> {
    Verifier::new(schema).verify(projection, expected, actual)
}

impl<'a> Verifier<'a> {
    pub fn new(schema: &'a Schema) -> Verifier<'a> {
        Verifier {
            schema,
            sort_keys: IndexMap::new(),
        }
    }

    /// Sorts lists of `domain` objects by `field` before pairing them.
    pub fn sort_by(mut self, domain: impl Into<DomainType>, field: impl Into<String>) -> Self {
        self.sort_keys.insert(domain.into(), field.into());
        self
    }

    pub fn verify(
        &self,
        projection: &Projection,
        expected: &Value,
        actual: &Value,
    ) -> Vec<Mismatch> {
        let mut mismatches = vec![];
        let mut queue = VecDeque::new();

        queue.push_back(Pending {
            path: projection.domain().to_string(),
            projection,
            expected,
            actual,
        });

        while let Some(pending) = queue.pop_front() {
            self.visit(pending, &mut queue, &mut mismatches);
        }

        mismatches
    }

    fn visit<'v>(
        &self,
        pending: Pending<'v>,
        queue: &mut VecDeque<Pending<'v>>,
        mismatches: &mut Vec<Mismatch>,
    ) {
        let Pending {
            path,
            projection,
            expected,
            actual,
        } = pending;
        let domain = projection.domain();

        let mismatch = |field: Option<&str>, message: String| Mismatch {
            path: path.clone(),
            domain: domain.clone(),
            field: field.map(str::to_string),
            message,
        };

        match (expected.is_null(), actual.is_null()) {
            (true, true) => return,
            (true, false) => {
                mismatches.push(mismatch(None, format!("expected null, found {actual}")));
                return;
            }
            (false, true) => {
                mismatches.push(mismatch(None, format!("expected {expected}, found null")));
                return;
            }
            (false, false) => {}
        }

        if !expected.is_object() || !actual.is_object() {
            mismatches.push(mismatch(
                None,
                format!("expected objects, found {expected} and {actual}"),
            ));
            return;
        }

        for field in projection.fields() {
            let (expected, actual) = (&expected[field], &actual[field]);

            if !expected.loose_eq(actual) {
                mismatches.push(mismatch(
                    Some(field),
                    format!("expected {expected}, found {actual}"),
                ));
            }
        }

        for (name, child) in projection.relationships() {
            let (expected, actual) = (&expected[name], &actual[name]);
            let path = format!("{path}.{name}");

            let to_many = match self.schema.relationship(domain, name) {
                Ok(relationship) => relationship.kind.is_to_many(),
                Err(err) => {
                    mismatches.push(mismatch(Some(name), err.to_string()));
                    continue;
                }
            };

            if !to_many {
                queue.push_back(Pending {
                    path,
                    projection: child,
                    expected,
                    actual,
                });
                continue;
            }

            let (Some(expected), Some(actual)) = (expected.as_list(), actual.as_list()) else {
                if !(expected.is_null() && actual.is_null()) {
                    mismatches.push(mismatch(
                        Some(name),
                        format!("expected lists, found {expected} and {actual}"),
                    ));
                }
                continue;
            };

            if expected.len() != actual.len() {
                mismatches.push(mismatch(
                    Some(name),
                    format!(
                        "expected {} elements, found {}",
                        expected.len(),
                        actual.len()
                    ),
                ));
                continue;
            }

            let expected = self.sorted(child, expected);
            let actual = self.sorted(child, actual);

            for (i, (expected, actual)) in expected.into_iter().zip(actual).enumerate() {
                queue.push_back(Pending {
                    path: format!("{path}[{i}]"),
                    projection: child,
                    expected,
                    actual,
                });
            }
        }
    }

    fn sorted<'v>(&self, projection: &Projection, items: &'v [Value]) -> Vec<&'v Value> {
        let mut items: Vec<_> = items.iter().collect();

        if let Some(key) = self.sort_key(projection) {
            items.sort_by(|lhs, rhs| lhs[key].loose_cmp(&rhs[key]));
        }

        items
    }

    fn sort_key<'p>(&'p self, projection: &'p Projection) -> Option<&'p str> {
        let domain = projection.domain();

        if let Some(field) = self.sort_keys.get(domain) {
            return Some(field.as_str());
        }

        let primary_key = self
            .schema
            .mapping(domain)
            .ok()
            .map(|mapping| mapping.primary_key_field())
            .filter(|field| projection.has_field(field));

        primary_key.or_else(|| projection.fields().next())
    }
}
