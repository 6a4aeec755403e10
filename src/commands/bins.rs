use crate::api::ClickUp;
use crate::libs::{
    config::Credentials,
    view::View,
    week::{WeekSummary, WeekWindow},
};
use anyhow::Result;
use chrono::Local;

/// Prints the last five week windows, oldest first, each summarized as a
/// total and a per-task-name breakdown of hours.
pub async fn cmd(credentials: &Credentials) -> Result<()> {
    let api = ClickUp::new(credentials)?;
    let today = Local::now().date_naive();

    for window in WeekWindow::last_bins(today) {
        let entries = api.time_entries(Some(window.start_millis()?), Some(window.end_millis()?)).await?;
        let summary = WeekSummary::from_entries(&entries)?;
        View::week(&window, &summary)?;
    }

    Ok(())
}
