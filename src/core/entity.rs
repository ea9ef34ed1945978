//! Record trait shared by every stored entity type

use crate::core::field::{FieldTable, FieldValue};

/// Base trait for all records held by the store.
///
/// All records have:
/// - id: integer identity, unset until the store assigns one
/// - a static field table used for generic filtering and sorting
///
/// Implementations are normally generated with [`impl_record!`](crate::impl_record).
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "groups")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "group")
    fn resource_name_singular() -> &'static str;

    /// Identity of this record, `None` before creation
    fn id(&self) -> Option<i64>;

    /// Assign the identity of this record
    fn set_id(&mut self, id: i64);

    /// Field table for this record type, built once per process
    fn field_table() -> &'static FieldTable<Self>;

    /// Get the value of a logical field by name (case-insensitive)
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Self::field_table().value(self, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    #[derive(Clone, Debug)]
    struct TestRecord {
        id: Option<i64>,
        label: String,
    }

    impl Record for TestRecord {
        fn resource_name() -> &'static str {
            "test_records"
        }

        fn resource_name_singular() -> &'static str {
            "test_record"
        }

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn set_id(&mut self, id: i64) {
            self.id = Some(id);
        }

        fn field_table() -> &'static FieldTable<Self> {
            static TABLE: OnceLock<FieldTable<TestRecord>> = OnceLock::new();
            TABLE.get_or_init(|| {
                FieldTable::<TestRecord>::builder()
                    .integer("id", |r| r.id)
                    .text("label", |r| r.label.as_str())
                    .build()
            })
        }
    }

    #[test]
    fn test_field_value_through_table() {
        let mut record = TestRecord {
            id: None,
            label: "first".to_string(),
        };
        assert_eq!(record.field_value("id"), None);

        record.set_id(9);
        assert_eq!(record.id(), Some(9));
        assert_eq!(record.field_value("ID"), Some(FieldValue::Integer(9)));
        assert_eq!(
            record.field_value("label"),
            Some(FieldValue::String("first".to_string()))
        );
    }

    #[test]
    fn test_record_metadata() {
        assert_eq!(TestRecord::resource_name(), "test_records");
        assert_eq!(TestRecord::resource_name_singular(), "test_record");
    }
}
