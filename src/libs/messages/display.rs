//! Display implementation converting `Message` variants into terminal text.
//!
//! All wording follows the same conventions: sentence case, active voice,
//! and concrete remediation steps where the user can fix the problem
//! themselves (credentials, syntax errors).

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CREDENTIAL MESSAGES ===
            Message::ApiTokenMissing => concat!(
                "CLICKUP_PK not set! Please create a key for ClickUp at\n",
                "https://clickup.com/api/developer-portal/authentication#personal-token\n",
                "and set environment variable CLICKUP_PK to that value"
            )
            .to_string(),
            Message::TeamIdMissing => concat!(
                "CLICKUP_TEAM_ID not set!\n",
                "Your team id is the number after the base website domain\n",
                "https://app.clickup.com/YOUR_ID_HERE\n",
                "Please set environment variable CLICKUP_TEAM_ID to that number"
            )
            .to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigPath(path) => path.clone(),
            Message::ConfigReadFailed(err) => format!("Failed to read config file: {}", err),
            Message::ConfigSaveFailed(err) => format!("Failed to save config file: {}", err),

            // === FIRST-RUN / BOOTSTRAP MESSAGES ===
            Message::FirstRunDetected => "I see it is the first time running this.".to_string(),
            Message::BootstrapFetching => {
                "Retrieving recent ClickUp time entries to populate the list of convenient task short names.".to_string()
            }
            Message::BootstrapShortNameCount(count) => format!("Cached {} short name(s)", count),
            Message::BootstrapHint => "Use the 'config' command to see short names available to the 'add' command".to_string(),

            // === ADD MESSAGES ===
            Message::AddTargetNumeric(token) => format!(
                "The 3rd 'add' argument should always be a task id or short name.\nAn integer was passed so we are exiting.\n{}",
                token
            ),
            Message::AddInvalidSyntax => concat!(
                "Invalid syntax. Please use\n",
                "add since last SHORTNAME\n",
                "add 1300 1330 SHORTNAME\n",
                "add 10 min SHORTNAME"
            )
            .to_string(),
            Message::ClockValueOutOfRange => {
                "The 1st and 2nd 'add' arguments should be in the range from 0 to 2359 when specifying times".to_string()
            }
            Message::ClockMinutesInvalid(value) => format!("{:04} is not a valid clock time: minutes must be below 60", value),
            Message::ClockRangeInverted => "The end time must be after the start time".to_string(),
            Message::NoEntriesForSinceLast => "No existing time entries found, so there is no 'last' entry to start from".to_string(),

            // === RESOLVER MESSAGES ===
            Message::ShortNameNotCached(target) => format!("{} not found in short name cache", target),
            Message::TaskNotFoundRemote(target) => format!("{} not found in ClickUp", target),
            Message::TaskFoundRemote(id, name) => format!("Found in ClickUp: {} {}", id, name),
            Message::ShortNameSaved {
                short_name,
                custom_id,
                task_id,
            } => format!(
                "Writing short name record to config: {}=[\"{}\", \"{}\"]",
                short_name, custom_id, task_id
            ),

            // === TIME ENTRY MESSAGES ===
            Message::EntriesNotFound => "No time entries found for the requested period".to_string(),
            Message::EntryCreated {
                start,
                end,
                short_name,
                custom_id,
            } => format!("Created entry from {} to {} for {} {}", start, end, short_name, custom_id),
            Message::EntryCreateFailed {
                start,
                end,
                short_name,
                custom_id,
            } => format!(
                "Unsuccessful trying to create entry from {} to {} for {} {}",
                start, end, short_name, custom_id
            ),
            Message::ApiErrorStatus(status) => format!("Error: {}", status),
            Message::MalformedEntryTimestamp(raw) => format!("Malformed timestamp in API response: {}", raw),
        };
        write!(f, "{}", text)
    }
}
