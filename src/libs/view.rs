use super::formatter::{format_hours, FormattedEntry};
use super::week::{WeekSummary, WeekWindow};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn entries(entries: &Vec<FormattedEntry>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["START", "STOP", "ID", "NAME"]);
        for entry in entries {
            table.add_row(row![entry.start, entry.stop, entry.custom_id, entry.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn week(window: &WeekWindow, summary: &WeekSummary) -> Result<()> {
        println!("Week starting {}", window.start.date());
        println!("{:<25} {}\n", format!("{} entries", summary.entry_count), format_hours(&summary.total));
        for (name, duration) in &summary.buckets {
            println!("{:<25} {}", name, format_hours(duration));
        }
        println!();

        Ok(())
    }
}
