use super::*;

use indexmap::IndexMap;
use std::ops;

/// A named-field node of a result graph.
///
/// Entries keep insertion order, so an object resolved through a projection
/// lists its scalar fields first, then its relationships, each in projection
/// order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueObject {
    pub fields: IndexMap<String, Value>,
}

impl ValueObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }
}

impl ops::Deref for ValueObject {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

impl ops::DerefMut for ValueObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValueObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
