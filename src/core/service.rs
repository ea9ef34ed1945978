//! Service trait for group and member operations

use crate::core::error::Result;
use crate::entities::{Group, Member};
use crate::query::{self, RecordQuery};
use async_trait::async_trait;

/// Service trait for managing groups and their members
///
/// Implementations provide CRUD over both record types. Members are
/// partitioned by owning group id; member ids come from a single counter
/// shared by all groups. The provided `find_groups` / `find_members`
/// methods copy a snapshot out of the store and run the query engine on it
/// without holding any lock.
#[async_trait]
pub trait GroupService: Send + Sync {
    /// Snapshot of all groups, ordered by id
    async fn find_all(&self) -> Result<Vec<Group>>;

    /// Get a group by id
    async fn find_one(&self, id: i64) -> Result<Option<Group>>;

    /// Insert a group, assigning an id if it has none, or replace it in place
    async fn save(&self, group: Group) -> Result<Group>;

    /// Remove a group, returning it if it existed
    ///
    /// Members of the group are left in place.
    async fn delete(&self, id: i64) -> Result<Option<Group>>;

    /// Insert or replace a member within a group's partition
    ///
    /// The partition is created on first use.
    async fn save_member(&self, group_id: i64, member: Member) -> Result<Member>;

    /// Snapshot of a group's members, `None` if the group has no partition
    async fn find_all_members(&self, group_id: i64) -> Result<Option<Vec<Member>>>;

    /// Get a member within a group
    async fn find_member(&self, group_id: i64, member_id: i64) -> Result<Option<Member>>;

    /// Remove a member from a group, returning it if it existed
    async fn delete_member(&self, group_id: i64, member_id: i64) -> Result<Option<Member>>;

    /// Filter, sort and page the current groups
    async fn find_groups(&self, query: &RecordQuery) -> Result<Vec<Group>> {
        let groups = self.find_all().await?;
        Ok(query::execute(groups, query)?)
    }

    /// Filter, sort and page a group's members
    async fn find_members(&self, group_id: i64, query: &RecordQuery) -> Result<Option<Vec<Member>>> {
        match self.find_all_members(group_id).await? {
            Some(members) => Ok(Some(query::execute(members, query)?)),
            None => Ok(None),
        }
    }
}
