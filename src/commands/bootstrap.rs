//! First-run bootstrap: seed the short-name cache from recent entries.
//!
//! Runs instead of the requested verb when no config file exists yet. The
//! resulting cache is what makes the `add` command's short targets work.

use crate::api::ClickUp;
use crate::libs::{
    config::{Config, Credentials},
    messages::Message,
    resolver,
};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Duration, Local};

const BOOTSTRAP_DAYS: i64 = 30;

pub async fn cmd(credentials: &Credentials) -> Result<()> {
    msg_print!(Message::FirstRunDetected);
    msg_print!(Message::BootstrapFetching, true);

    let api = ClickUp::new(credentials)?;
    let start = Local::now() - Duration::days(BOOTSTRAP_DAYS);
    let mut entries = api.time_entries(Some(start.timestamp_millis()), None).await?;
    entries.sort_by_key(|entry| entry.start_millis().unwrap_or(0));

    let mut config = Config::read()?;
    let count = resolver::populate_from_entries(&mut config, &entries)?;

    msg_success!(Message::BootstrapShortNameCount(count));
    msg_info!(Message::BootstrapHint);
    Ok(())
}
