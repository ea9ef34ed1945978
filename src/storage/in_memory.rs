//! In-memory implementation of GroupService

use crate::core::entity::Record;
use crate::core::error::{EntityError, Result, StorageError};
use crate::core::service::GroupService;
use crate::entities::{Group, Member};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

type MemberPartitions = BTreeMap<i64, BTreeMap<i64, Member>>;

/// In-memory group service implementation
///
/// Uses RwLock for thread-safe access. Maps are ordered by id so snapshots
/// come out in a stable order. Id counters only grow: an id is never handed
/// out twice, even after the record holding it is deleted.
#[derive(Clone, Default)]
pub struct InMemoryGroupService {
    groups: Arc<RwLock<BTreeMap<i64, Group>>>,
    members: Arc<RwLock<MemberPartitions>>,
    next_group_id: Arc<AtomicI64>,
    next_member_id: Arc<AtomicI64>,
}

impl InMemoryGroupService {
    /// Create an empty in-memory service
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(resource: &'static str) -> StorageError {
    StorageError::LockPoisoned { resource }
}

/// Give `record` the next id, or make sure the counter never reissues the one it carries
fn assign_id<R: Record>(counter: &AtomicI64, record: &mut R) -> std::result::Result<i64, StorageError> {
    let id = match record.id() {
        Some(id) => {
            counter.fetch_max(id, Ordering::SeqCst);
            id
        }
        None => {
            let previous = counter
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
                .map_err(|_| StorageError::IdsExhausted {
                    resource: R::resource_name(),
                })?;
            previous + 1
        }
    };
    record.set_id(id);
    Ok(id)
}

#[async_trait]
impl GroupService for InMemoryGroupService {
    async fn find_all(&self) -> Result<Vec<Group>> {
        let groups = self.groups.read().map_err(|_| poisoned("groups"))?;

        Ok(groups.values().cloned().collect())
    }

    async fn find_one(&self, id: i64) -> Result<Option<Group>> {
        let groups = self.groups.read().map_err(|_| poisoned("groups"))?;

        Ok(groups.get(&id).cloned())
    }

    async fn save(&self, mut group: Group) -> Result<Group> {
        let mut groups = self.groups.write().map_err(|_| poisoned("groups"))?;

        let id = assign_id(&self.next_group_id, &mut group)?;
        groups.insert(id, group.clone());

        tracing::debug!(group_id = id, "group saved");
        Ok(group)
    }

    async fn delete(&self, id: i64) -> Result<Option<Group>> {
        let mut groups = self.groups.write().map_err(|_| poisoned("groups"))?;

        let removed = groups.remove(&id);
        if removed.is_some() {
            tracing::debug!(group_id = id, "group deleted");
        }
        Ok(removed)
    }

    async fn save_member(&self, group_id: i64, mut member: Member) -> Result<Member> {
        let mut members = self.members.write().map_err(|_| poisoned("members"))?;

        if let Some(member_id) = member.id {
            // an explicit id is an update of an existing member
            let known = members
                .get(&group_id)
                .is_some_and(|partition| partition.contains_key(&member_id));
            if !known {
                return Err(EntityError::MemberNotFound {
                    group_id,
                    member_id,
                }
                .into());
            }
        }

        let id = assign_id(&self.next_member_id, &mut member)?;
        members.entry(group_id).or_default().insert(id, member.clone());

        tracing::debug!(group_id, member_id = id, "member saved");
        Ok(member)
    }

    async fn find_all_members(&self, group_id: i64) -> Result<Option<Vec<Member>>> {
        let members = self.members.read().map_err(|_| poisoned("members"))?;

        Ok(members
            .get(&group_id)
            .map(|partition| partition.values().cloned().collect()))
    }

    async fn find_member(&self, group_id: i64, member_id: i64) -> Result<Option<Member>> {
        let members = self.members.read().map_err(|_| poisoned("members"))?;

        Ok(members
            .get(&group_id)
            .and_then(|partition| partition.get(&member_id))
            .cloned())
    }

    async fn delete_member(&self, group_id: i64, member_id: i64) -> Result<Option<Member>> {
        let mut members = self.members.write().map_err(|_| poisoned("members"))?;

        let removed = members
            .get_mut(&group_id)
            .and_then(|partition| partition.remove(&member_id));
        if removed.is_some() {
            tracing::debug!(group_id, member_id, "member deleted");
        }
        Ok(removed)
    }
}
