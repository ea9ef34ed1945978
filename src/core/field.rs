//! Field values and per-type field tables
//!
//! Generic filtering and sorting need to read a record's attributes by name.
//! Instead of looking accessors up at runtime, every record type declares a
//! [`FieldTable`] once: a map of lowercase logical names to typed getters.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field value read from a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    String(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::String(s) => f.write_str(s),
        }
    }
}

/// Declared semantic type of a logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
}

/// Typed getter for one logical field of `T`
///
/// An `Integer` getter returning `None` means the value is not set on that
/// record (an id before creation, for instance).
pub enum FieldAccessor<T> {
    Integer(fn(&T) -> Option<i64>),
    Text(fn(&T) -> &str),
}

impl<T> FieldAccessor<T> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldAccessor::Integer(_) => FieldKind::Integer,
            FieldAccessor::Text(_) => FieldKind::Text,
        }
    }

    /// Read the field from a record
    pub fn read(&self, record: &T) -> Option<FieldValue> {
        match self {
            FieldAccessor::Integer(get) => get(record).map(FieldValue::Integer),
            FieldAccessor::Text(get) => Some(FieldValue::String(get(record).to_string())),
        }
    }
}

// Manual impls: fn pointers are Copy regardless of T
impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldAccessor<T> {}

impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldAccessor").field(&self.kind()).finish()
    }
}

/// Name → accessor table for one record type
///
/// Names are stored lowercase and looked up case-insensitively. Declaration
/// order is preserved.
#[derive(Debug)]
pub struct FieldTable<T> {
    fields: IndexMap<String, FieldAccessor<T>>,
}

impl<T> FieldTable<T> {
    /// Start declaring a table
    pub fn builder() -> FieldTableBuilder<T> {
        FieldTableBuilder {
            fields: IndexMap::new(),
        }
    }

    /// Resolve a logical field name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<FieldAccessor<T>> {
        self.fields.get(&name.to_lowercase()).copied()
    }

    /// Read a field from a record by logical name
    ///
    /// Returns `None` if the field is unknown or unset on this record.
    pub fn value(&self, record: &T, name: &str) -> Option<FieldValue> {
        self.get(name).and_then(|accessor| accessor.read(record))
    }

    /// Declared field names, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`FieldTable`]
pub struct FieldTableBuilder<T> {
    fields: IndexMap<String, FieldAccessor<T>>,
}

impl<T> FieldTableBuilder<T> {
    /// Declare a numeric field
    pub fn integer(mut self, name: &str, get: fn(&T) -> Option<i64>) -> Self {
        self.fields
            .insert(name.to_lowercase(), FieldAccessor::Integer(get));
        self
    }

    /// Declare a string field
    pub fn text(mut self, name: &str, get: fn(&T) -> &str) -> Self {
        self.fields.insert(name.to_lowercase(), FieldAccessor::Text(get));
        self
    }

    pub fn build(self) -> FieldTable<T> {
        FieldTable {
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pet {
        id: Option<i64>,
        name: String,
    }

    fn table() -> FieldTable<Pet> {
        FieldTable::<Pet>::builder()
            .integer("id", |p| p.id)
            .text("name", |p| p.name.as_str())
            .build()
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::String("rex".to_string()).to_string(), "rex");
        assert_eq!(FieldValue::Integer(-7).to_string(), "-7");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = table();
        let pet = Pet {
            id: Some(3),
            name: "Rex".to_string(),
        };

        assert_eq!(table.value(&pet, "NAME"), Some(FieldValue::String("Rex".into())));
        assert_eq!(table.value(&pet, "Id"), Some(FieldValue::Integer(3)));
        assert_eq!(table.get("nAmE").map(|a| a.kind()), Some(FieldKind::Text));
    }

    #[test]
    fn test_unknown_and_unset_fields() {
        let table = table();
        let pet = Pet {
            id: None,
            name: "Rex".to_string(),
        };

        assert!(table.get("owner").is_none());
        assert_eq!(table.value(&pet, "owner"), None);
        assert_eq!(table.value(&pet, "id"), None);
    }

    #[test]
    fn test_names_keep_declaration_order() {
        let table = table();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_serde_untagged() {
        let json = serde_json::to_string(&FieldValue::Integer(42)).expect("serialize");
        assert_eq!(json, "42");
        let json = serde_json::to_string(&FieldValue::String("a".into())).expect("serialize");
        assert_eq!(json, "\"a\"");
    }
}
