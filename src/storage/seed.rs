//! Demo data for local runs
//!
//! Fills a service with generated groups, each holding between one and
//! `max_members` members. Output is deterministic for a given config.

use crate::config::SeedConfig;
use crate::core::error::Result;
use crate::core::service::GroupService;
use crate::entities::{Group, Member};

const GROUP_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "amet", "consectetur", "adipiscing", "elit", "sed", "tempor",
    "incididunt", "labore", "magna", "aliqua", "veniam", "nostrud", "ullamco", "laboris",
    "commodo", "consequat", "aute", "irure", "velit", "esse", "cillum", "fugiat", "nulla",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Brian", "Claude", "Dennis", "Edsger", "Frances", "Grace",
    "Guido", "Hedy", "Ivan", "John", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Shafi",
    "Tim",
];

/// Create `config.groups` groups with their members
///
/// Returns the number of groups created.
pub async fn seed_demo_data(service: &dyn GroupService, config: &SeedConfig) -> Result<usize> {
    if config.groups == 0 {
        return Ok(0);
    }

    let max_members = config.max_members.max(1);
    let mut member_cursor = 0usize;

    for i in 0..config.groups {
        let group = service
            .save(Group::new(word(i), sentence(i, 7)))
            .await?;
        let Some(group_id) = group.id else {
            continue;
        };

        let member_count = (i * 7 + 3) % max_members + 1;
        for _ in 0..member_count {
            let name = FIRST_NAMES[member_cursor % FIRST_NAMES.len()];
            member_cursor += 1;
            service.save_member(group_id, Member::new(name)).await?;
        }
    }

    tracing::info!(
        groups = config.groups,
        members = member_cursor,
        "seeded demo data"
    );
    Ok(config.groups)
}

fn word(seed: usize) -> &'static str {
    GROUP_WORDS[seed % GROUP_WORDS.len()]
}

fn sentence(seed: usize, words: usize) -> String {
    (0..words)
        .map(|n| word(seed * 31 + n * 7))
        .collect::<Vec<_>>()
        .join(" ")
}
