//! Short-name resolution against the cache with an API fallback.
//!
//! A target token resolves in this order: exact short-name match, cached
//! custom id, cached remote task id, and finally a live ClickUp lookup.
//! A successful live lookup persists a new mapping so the next resolution
//! is a cache hit; a failed one is fatal for the current command. Cache
//! hits never touch the network.

use crate::api::{ClickUp, TimeEntry};
use crate::libs::config::{Config, ShortName};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use std::collections::HashSet;

/// Bootstrap skips tasks whose display name has this many words or more;
/// their first word is unlikely to make a meaningful short name.
const MAX_NAME_WORDS: usize = 6;

/// A fully resolved target, ready for entry creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTask {
    pub short_name: String,
    pub custom_id: String,
    pub task_id: String,
}

fn derive_short_name(display_name: &str) -> String {
    display_name.split_whitespace().next().unwrap_or_default().to_lowercase()
}

/// Resolves `target` to a task, falling back to a live lookup on cache miss.
///
/// The fallback persists a new short name derived from the first word of
/// the task's display name; the stored custom id is the user's token,
/// lower-cased. Resolution is idempotent: a second call for the same
/// target is a cache hit and creates no duplicate entries.
pub async fn resolve(config: &mut Config, api: &ClickUp, target: &str) -> Result<ResolvedTask> {
    if let Some((short_name, entry)) = config.find_target(target) {
        return Ok(ResolvedTask {
            short_name,
            custom_id: entry.custom_id,
            task_id: entry.task_id,
        });
    }

    msg_print!(Message::ShortNameNotCached(target.to_string()));
    let task = match api.find_task(target).await? {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::TaskNotFoundRemote(target.to_string())),
    };
    msg_print!(Message::TaskFoundRemote(task.id.clone(), task.name.clone()));

    let short_name = derive_short_name(&task.name);
    let custom_id = target.to_lowercase();
    msg_print!(Message::ShortNameSaved {
        short_name: short_name.clone(),
        custom_id: custom_id.clone(),
        task_id: task.id.clone(),
    });
    config.set_short_name(
        &short_name,
        ShortName {
            custom_id: custom_id.clone(),
            task_id: task.id.clone(),
        },
    )?;

    Ok(ResolvedTask {
        short_name,
        custom_id,
        task_id: task.id,
    })
}

/// Seeds the short-name cache from a batch of time entries.
///
/// Used by the first-run bootstrap. Per remote task id the first entry
/// seen wins; tasks with long display names are skipped; a short-name
/// collision keeps the later task, mirroring plain map insertion. The
/// config is persisted once at the end.
pub fn populate_from_entries(config: &mut Config, entries: &[TimeEntry]) -> Result<usize> {
    let mut seen_ids = HashSet::new();
    for entry in entries {
        let task = &entry.task;
        if !seen_ids.insert(task.id.clone()) {
            continue;
        }
        if task.name.split_whitespace().count() >= MAX_NAME_WORDS {
            continue;
        }
        let short_name = derive_short_name(&task.name);
        if short_name.is_empty() {
            continue;
        }
        let custom_id = task.custom_id.clone().unwrap_or_default().to_lowercase();
        config.shortnames.insert(
            short_name,
            ShortName {
                custom_id,
                task_id: task.id.clone(),
            },
        );
    }
    config.save()?;
    Ok(config.shortnames.len())
}
