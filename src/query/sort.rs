//! Sort expressions: `field|-field`
//!
//! Keys are applied left to right; a leading `-` sorts that key descending.
//! The sort is stable, so records equal on every key keep their input order.

use crate::core::entity::Record;
use crate::core::field::FieldAccessor;
use std::cmp::Ordering;

const KEY_SEPARATOR: char = '|';
const DESCENDING_PREFIX: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// One sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: Direction,
}

impl SortKey {
    fn parse(raw: &str) -> Option<Self> {
        let (field, direction) = match raw.strip_prefix(DESCENDING_PREFIX) {
            Some(field) => (field, Direction::Descending),
            None => (raw, Direction::Ascending),
        };

        if field.is_empty() {
            return None;
        }

        Some(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// Parsed sort expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Parse a raw sort string; empty keys are dropped
    pub fn parse(raw: Option<&str>) -> Self {
        let keys = raw
            .map(|raw| raw.split(KEY_SEPARATOR).filter_map(SortKey::parse).collect())
            .unwrap_or_default();

        Self { keys }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Stable-sort records by the composed key comparators
    pub fn apply<T: Record>(&self, mut records: Vec<T>) -> Vec<T> {
        let comparators: Vec<KeyComparator<T>> = self
            .keys
            .iter()
            .map(KeyComparator::bind)
            .filter(|c| !c.is_inert())
            .collect();

        if comparators.is_empty() {
            return records;
        }

        records.sort_by(|a, b| {
            comparators
                .iter()
                .fold(Ordering::Equal, |acc, c| acc.then_with(|| c.compare(a, b)))
        });
        records
    }
}

/// Comparator for one key, chosen from the field's declared kind
enum KeyComparator<T> {
    Numeric {
        get: fn(&T) -> Option<i64>,
        direction: Direction,
    },
    Text {
        get: fn(&T) -> &str,
        direction: Direction,
    },
    /// Unknown field: every pair compares equal
    Inert,
}

impl<T: Record> KeyComparator<T> {
    fn bind(key: &SortKey) -> Self {
        match T::field_table().get(&key.field) {
            Some(FieldAccessor::Integer(get)) => KeyComparator::Numeric {
                get,
                direction: key.direction,
            },
            Some(FieldAccessor::Text(get)) => KeyComparator::Text {
                get,
                direction: key.direction,
            },
            None => KeyComparator::Inert,
        }
    }

    fn is_inert(&self) -> bool {
        matches!(self, KeyComparator::Inert)
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            // unset values order before set ones
            KeyComparator::Numeric { get, direction } => direction.apply(get(a).cmp(&get(b))),
            KeyComparator::Text { get, direction } => direction.apply(get(a).cmp(get(b))),
            KeyComparator::Inert => Ordering::Equal,
        }
    }
}
