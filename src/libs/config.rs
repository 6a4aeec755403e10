//! Configuration management for the clk application.
//!
//! Two concerns live here:
//!
//! - **Credentials**: the ClickUp personal token and team id, read from the
//!   environment at startup. Both are required; a missing value is a fatal
//!   error with remediation instructions. Nothing secret is ever written to
//!   disk.
//! - **Short-name cache**: a persistent mapping from convenient short names
//!   to `(custom id, remote task id)` pairs, stored as JSON in the platform
//!   data directory. The cache is read fully at startup and rewritten fully
//!   on every update; there is no batching and no locking.
//!
//! ## Configuration Structure
//!
//! ```json
//! {
//!   "shortnames": {
//!     "acme": { "custom_id": "cust-1", "task_id": "abc123" }
//!   }
//! }
//! ```
//!
//! A config file that predates the `shortnames` section is normalized on
//! first load: the empty section is added and the file rewritten.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Configuration file name used for storing the short-name cache.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the ClickUp personal API token.
pub const ENV_API_TOKEN: &str = "CLICKUP_PK";

/// Environment variable holding the ClickUp team (workspace) id.
pub const ENV_TEAM_ID: &str = "CLICKUP_TEAM_ID";

/// ClickUp API credentials, read once at startup.
///
/// Passed explicitly to the components that need it instead of living in
/// process-wide globals.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Personal API token, sent verbatim in the `Authorization` header.
    pub token: String,
    /// Team id, part of every team-scoped endpoint path.
    pub team_id: String,
}

impl Credentials {
    /// Reads credentials from the environment.
    ///
    /// Returns a fatal error with remediation instructions if either
    /// variable is absent or empty.
    pub fn from_env() -> Result<Self> {
        let token = env::var(ENV_API_TOKEN).ok().filter(|v| !v.is_empty());
        let token = token.ok_or_else(|| msg_error_anyhow!(Message::ApiTokenMissing))?;

        let team_id = env::var(ENV_TEAM_ID).ok().filter(|v| !v.is_empty());
        let team_id = team_id.ok_or_else(|| msg_error_anyhow!(Message::TeamIdMissing))?;

        Ok(Self { token, team_id })
    }
}

/// A cached association between a short name and a remote task.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShortName {
    /// The user-facing custom task id (e.g. `cust-42`), lower-cased.
    pub custom_id: String,
    /// The remote ClickUp task id.
    pub task_id: String,
}

/// The persistent short-name cache.
///
/// `BTreeMap` keeps the on-disk JSON stable across rewrites, which matters
/// because the file is human-readable and occasionally hand-edited.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub shortnames: BTreeMap<String, ShortName>,
}

impl Config {
    /// Returns the full path of the config file.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reports whether a config file already exists on disk.
    ///
    /// Used by the dispatcher to detect the first run, which triggers the
    /// short-name bootstrap instead of the requested command.
    pub fn exists() -> Result<bool> {
        Ok(Self::path()?.exists())
    }

    /// Reads the config file, or returns an empty config if none exists.
    ///
    /// A file missing the `shortnames` section is normalized: the empty
    /// section is added and the file immediately rewritten to disk.
    pub fn read() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path).map_err(|e| msg_error_anyhow!(Message::ConfigReadFailed(e.to_string())))?;
        let raw: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| msg_error_anyhow!(Message::ConfigReadFailed(e.to_string())))?;
        let had_section = raw.get("shortnames").is_some();
        let config: Self = serde_json::from_value(raw).map_err(|e| msg_error_anyhow!(Message::ConfigReadFailed(e.to_string())))?;
        if !had_section {
            config.save()?;
        }
        Ok(config)
    }

    /// Writes the whole config back to disk, replacing the previous file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents).map_err(|e| msg_error_anyhow!(Message::ConfigSaveFailed(e.to_string())))?;
        Ok(())
    }

    /// Looks up a user-supplied token against the cache.
    ///
    /// Resolution order: exact short-name match, then custom-id match, then
    /// remote task-id match. Returns the short name alongside the entry.
    pub fn find_target(&self, token: &str) -> Option<(String, ShortName)> {
        if let Some(entry) = self.shortnames.get(token) {
            return Some((token.to_string(), entry.clone()));
        }
        if let Some((name, entry)) = self.shortnames.iter().find(|(_, e)| e.custom_id == token) {
            return Some((name.clone(), entry.clone()));
        }
        if let Some((name, entry)) = self.shortnames.iter().find(|(_, e)| e.task_id == token) {
            return Some((name.clone(), entry.clone()));
        }
        None
    }

    /// Upserts a short-name entry and immediately persists the config.
    ///
    /// At most one short name may map to a given remote task id, so any
    /// existing entry carrying the same task id is dropped first (last
    /// write wins).
    pub fn set_short_name(&mut self, key: &str, entry: ShortName) -> Result<()> {
        self.shortnames.retain(|name, e| name == key || e.task_id != entry.task_id);
        self.shortnames.insert(key.to_string(), entry);
        self.save()
    }
}
