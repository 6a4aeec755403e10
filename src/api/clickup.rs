//! ClickUp REST API (v2) client.
//!
//! Authentication uses the personal token verbatim in the `Authorization`
//! header. Timestamps on the wire are epoch milliseconds; the list endpoint
//! returns them as strings, which is why `TimeEntry` keeps the raw strings
//! and exposes parsing helpers. The service gives no ordering guarantee for
//! listed entries, so callers sort as needed.

use crate::libs::config::Credentials;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Duration, Local, TimeZone};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use serde::{Deserialize, Serialize};
use std::time::Duration as StdDuration;

const BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Fixed request timeout. Hygiene only, not a contract: the API is close
/// and fast, and a hung call should not hang the terminal forever.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A task as returned by the task-lookup endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RemoteTask {
    pub id: String,
    pub name: String,
}

/// The task reference embedded in a time entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TaskRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub custom_id: Option<String>,
}

/// A time entry as returned by the list endpoint.
///
/// `start` and `end` are epoch-millisecond strings, kept raw as the service
/// sends them. Entries are never cached beyond the current invocation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimeEntry {
    pub task: TaskRef,
    pub start: String,
    pub end: String,
}

impl TimeEntry {
    pub fn start_millis(&self) -> Result<i64> {
        parse_millis(&self.start)
    }

    pub fn end_millis(&self) -> Result<i64> {
        parse_millis(&self.end)
    }

    pub fn start_local(&self) -> Result<DateTime<Local>> {
        millis_to_local(self.start_millis()?, &self.start)
    }

    pub fn end_local(&self) -> Result<DateTime<Local>> {
        millis_to_local(self.end_millis()?, &self.end)
    }

    /// Duration of the entry. Entries this tool creates always have
    /// start ≤ end, but the service does not enforce that for other writers.
    pub fn duration(&self) -> Result<Duration> {
        Ok(Duration::milliseconds(self.end_millis()? - self.start_millis()?))
    }
}

fn parse_millis(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| msg_error_anyhow!(Message::MalformedEntryTimestamp(raw.to_string())))
}

fn millis_to_local(millis: i64, raw: &str) -> Result<DateTime<Local>> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| msg_error_anyhow!(Message::MalformedEntryTimestamp(raw.to_string())))
}

#[derive(Deserialize)]
struct TimeEntriesResponse {
    data: Vec<TimeEntry>,
}

#[derive(Serialize)]
struct CreateEntryRequest {
    start: i64,
    stop: i64,
    tid: String,
}

pub struct ClickUp {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl ClickUp {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_base_url(credentials, BASE_URL)
    }

    /// Builds a client against an alternate API root.
    pub fn with_base_url(credentials: &Credentials, base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(StdDuration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self {
            client,
            credentials: credentials.clone(),
            base_url: base_url.to_string(),
        })
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&self.credentials.token)?);
        Ok(headers)
    }

    /// Fetches a task by its custom id (case-insensitive, upper-cased on
    /// the wire). A non-success status means "not found" and maps to `None`.
    pub async fn find_task(&self, custom_id: &str) -> Result<Option<RemoteTask>> {
        let custom_id = custom_id.to_uppercase();
        let url = format!(
            "{}/task/{}?custom_task_ids=true&team_id={}",
            self.base_url, custom_id, self.credentials.team_id
        );
        let res = self.client.get(&url).headers(self.headers()?).send().await?;
        if !res.status().is_success() {
            return Ok(None);
        }
        Ok(Some(res.json::<RemoteTask>().await?))
    }

    /// Lists time entries for the team, optionally bounded to a range of
    /// epoch milliseconds. Order is whatever the service returns.
    pub async fn time_entries(&self, start_ms: Option<i64>, end_ms: Option<i64>) -> Result<Vec<TimeEntry>> {
        let url = format!("{}/team/{}/time_entries", self.base_url, self.credentials.team_id);
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(start) = start_ms {
            query.push(("start_date", start.to_string()));
        }
        if let Some(end) = end_ms {
            query.push(("end_date", end.to_string()));
        }
        let res = self.client.get(&url).headers(self.headers()?).query(&query).send().await?;
        let body = res.json::<TimeEntriesResponse>().await?;
        Ok(body.data)
    }

    /// Returns the most recent time entry, if any exist.
    pub async fn latest_entry(&self) -> Result<Option<TimeEntry>> {
        let mut entries = self.time_entries(None, None).await?;
        entries.sort_by_key(|e| std::cmp::Reverse(e.start_millis().unwrap_or(0)));
        Ok(entries.into_iter().next())
    }

    /// Creates a time entry against `task_id`. Returns the HTTP status; a
    /// non-success status is the caller's signal that nothing was recorded.
    pub async fn create_time_entry(&self, task_id: &str, start_ms: i64, stop_ms: i64) -> Result<StatusCode> {
        let url = format!("{}/team/{}/time_entries", self.base_url, self.credentials.team_id);
        let payload = CreateEntryRequest {
            start: start_ms,
            stop: stop_ms,
            tid: task_id.to_string(),
        };
        let res = self.client.post(&url).headers(self.headers()?).json(&payload).send().await?;
        Ok(res.status())
    }
}
