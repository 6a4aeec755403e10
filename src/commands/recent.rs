use crate::api::ClickUp;
use crate::libs::{config::Credentials, formatter::format_entry, messages::Message, view::View};
use crate::msg_info;
use anyhow::Result;
use chrono::{Duration, Local};

/// Days of history the `recent` listing covers.
const RECENT_DAYS: i64 = 30;

pub async fn cmd(credentials: &Credentials) -> Result<()> {
    let api = ClickUp::new(credentials)?;
    let start = Local::now() - Duration::days(RECENT_DAYS);
    let mut entries = api.time_entries(Some(start.timestamp_millis()), None).await?;
    entries.sort_by_key(|entry| entry.start_millis().unwrap_or(0));

    if entries.is_empty() {
        msg_info!(Message::EntriesNotFound);
        return Ok(());
    }

    let formatted = entries.iter().map(format_entry).collect::<Result<Vec<_>>>()?;
    View::entries(&formatted)
}
