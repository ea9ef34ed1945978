//! Member record

use serde::{Deserialize, Serialize};

/// A member belongs to exactly one group
///
/// The owning group is not part of the record: the store keys member
/// partitions by group id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

crate::impl_record!(Member, "member", "members", {
    id: optional_integer,
    name: text,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Record;
    use crate::core::field::FieldValue;

    #[test]
    fn test_member_fields() {
        let member = Member::new("Ada").with_id(12);
        assert_eq!(member.field_value("id"), Some(FieldValue::Integer(12)));
        assert_eq!(member.field_value("Name"), Some(FieldValue::String("Ada".into())));
        assert_eq!(member.field_value("description"), None);
        assert_eq!(Member::resource_name(), "members");
    }

    #[test]
    fn test_member_json_shape() {
        let json = serde_json::to_value(Member::new("Ada").with_id(2)).expect("serialize");
        assert_eq!(json, serde_json::json!({"id": 2, "name": "Ada"}));
    }
}
