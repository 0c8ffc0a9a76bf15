use crate::error::{BoardError, Result};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A timestamped record of something that happened to a board item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    description: String,
    timestamp: DateTime<Utc>,
}

impl EventLog {
    const TIMESTAMP_FORMAT: &'static str = "%d-%B-%Y %H:%M:%S";

    /// Creates an event stamped with the clock's current time
    ///
    /// Items record their own history internally; this is the checked entry
    /// point for hosts that build events from free-form text.
    pub fn new(description: impl Into<String>, clock: &impl Clock) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(BoardError::EmptyEventDescription);
        }

        Ok(Self {
            description,
            timestamp: clock.utc(),
        })
    }

    /// Records an event whose description is known to be non-empty
    pub(crate) fn recorded(description: String, clock: &impl Clock) -> Self {
        debug_assert!(!description.trim().is_empty());
        Self {
            description,
            timestamp: clock.utc(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Formats the event as `[16-October-2026 09:30:00] description`
    pub fn view_info(&self) -> String {
        format!(
            "[{}] {}",
            self.timestamp.format(Self::TIMESTAMP_FORMAT),
            self.description
        )
    }
}
