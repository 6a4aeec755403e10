use crate::api::ClickUp;
use crate::libs::{
    config::{Config, Credentials},
    formatter::format_datetime,
    interval::{self, AddSpec},
    messages::Message,
    resolver,
    week::local_millis,
};
use crate::{msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, Timelike};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Interval and target, e.g. `since last acme`, `1300 1330 acme`
    /// or `10 min acme`
    #[arg(required = true, num_args = 3, value_names = ["FIRST", "SECOND", "TARGET"])]
    tokens: Vec<String>,
}

pub async fn cmd(credentials: &Credentials, args: AddArgs) -> Result<()> {
    let spec = AddSpec::parse(&args.tokens[0], &args.tokens[1], &args.tokens[2])?;

    let mut config = Config::read()?;
    let api = ClickUp::new(credentials)?;
    let task = resolver::resolve(&mut config, &api, &args.tokens[2]).await?;

    // Seconds precision; entry timestamps never carry sub-second parts.
    let now = Local::now().naive_local().with_nanosecond(0).unwrap();
    let (start, end) = match spec {
        AddSpec::SinceLast => {
            let latest = api
                .latest_entry()
                .await?
                .ok_or_else(|| msg_error_anyhow!(Message::NoEntriesForSinceLast))?;
            (latest.end_local()?.naive_local(), now)
        }
        AddSpec::ClockRange { start, end } => interval::clock_interval(start, end, now.date()),
        AddSpec::Backwards { amount, unit } => interval::backwards_interval(amount, unit, now),
    };

    let status = api.create_time_entry(&task.task_id, local_millis(&start)?, local_millis(&end)?).await?;
    if status.is_success() {
        msg_success!(Message::EntryCreated {
            start: format_datetime(&start),
            end: format_datetime(&end),
            short_name: task.short_name,
            custom_id: task.custom_id,
        });
    } else {
        msg_error!(Message::ApiErrorStatus(status.as_u16()));
        msg_error!(Message::EntryCreateFailed {
            start: format_datetime(&start),
            end: format_datetime(&end),
            short_name: task.short_name,
            custom_id: task.custom_id,
        });
    }

    Ok(())
}
