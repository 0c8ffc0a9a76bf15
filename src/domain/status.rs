use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle stage of a board item
///
/// The declaration order is the lifecycle order: advancing moves one step
/// towards `Verified`, reverting one step towards `Open`. Both clamp at the
/// ends instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    Todo,
    InProgress,
    Done,
    Verified,
}

impl Status {
    /// All statuses in lifecycle order
    pub const ALL: [Status; 5] = [
        Status::Open,
        Status::Todo,
        Status::InProgress,
        Status::Done,
        Status::Verified,
    ];

    /// Zero-based position in the lifecycle
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Open => 0,
            Self::Todo => 1,
            Self::InProgress => 2,
            Self::Done => 3,
            Self::Verified => 4,
        }
    }

    /// Returns the next status, or `self` when already `Verified`
    pub const fn advance(self) -> Self {
        let next = self.ordinal() + 1;
        if next < Self::ALL.len() {
            Self::ALL[next]
        } else {
            self
        }
    }

    /// Returns the previous status, or `self` when already `Open`
    pub const fn revert(self) -> Self {
        match self.ordinal() {
            0 => self,
            ordinal => Self::ALL[ordinal - 1],
        }
    }

    /// Canonical lowercase name, matching the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Verified => "verified",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Todo => write!(f, "To Do"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Done => write!(f, "Done"),
            Self::Verified => write!(f, "Verified"),
        }
    }
}

impl FromStr for Status {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| crate::error::BoardError::InvalidStatus(s.to_string()))
    }
}
