//! Group record

use serde::{Deserialize, Serialize};

/// A group is a collection of members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique id of the group, assigned by the store on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Name of the group
    pub name: String,

    /// Description of the group
    #[serde(default)]
    pub description: String,
}

impl Group {
    /// Create a group that has not been stored yet
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

crate::impl_record!(Group, "group", "groups", {
    id: optional_integer,
    name: text,
    description: text,
});
