//! Centralized message definitions for all user-facing output.
//!
//! Every string the application prints lives here as a `Message` variant,
//! with the actual text in the `Display` implementation. This keeps wording
//! consistent across commands and makes the text trivially auditable.

/// All user-facing messages produced by the application.
#[derive(Debug, Clone)]
pub enum Message {
    // === CREDENTIAL MESSAGES ===
    ApiTokenMissing,
    TeamIdMissing,

    // === CONFIGURATION MESSAGES ===
    ConfigPath(String),
    ConfigReadFailed(String),
    ConfigSaveFailed(String),

    // === FIRST-RUN / BOOTSTRAP MESSAGES ===
    FirstRunDetected,
    BootstrapFetching,
    BootstrapShortNameCount(usize),
    BootstrapHint,

    // === ADD MESSAGES ===
    AddTargetNumeric(String),
    AddInvalidSyntax,
    ClockValueOutOfRange,
    ClockMinutesInvalid(u32),
    ClockRangeInverted,
    NoEntriesForSinceLast,

    // === RESOLVER MESSAGES ===
    ShortNameNotCached(String),
    TaskNotFoundRemote(String),
    TaskFoundRemote(String, String), // task id, name
    ShortNameSaved {
        short_name: String,
        custom_id: String,
        task_id: String,
    },

    // === TIME ENTRY MESSAGES ===
    EntriesNotFound,
    EntryCreated {
        start: String,
        end: String,
        short_name: String,
        custom_id: String,
    },
    EntryCreateFailed {
        start: String,
        end: String,
        short_name: String,
        custom_id: String,
    },
    ApiErrorStatus(u16),
    MalformedEntryTimestamp(String),
}
