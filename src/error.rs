use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Title must be between {min} and {max} characters, got {length}")]
    InvalidTitleLength { length: usize, min: usize, max: usize },

    #[error("Due date {due} cannot be in the past (today is {today})")]
    DueDateInPast { due: NaiveDate, today: NaiveDate },

    #[error("Event description cannot be empty")]
    EmptyEventDescription,

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid sort field '{0}'. Valid fields: title, status, due")]
    InvalidSortField(String),

    #[error("Invalid sort order '{0}'. Valid orders: asc, desc")]
    InvalidSortOrder(String),

    #[error("Board item not found at index {0}")]
    ItemNotFound(usize),

    #[error("Invalid item rules: minimum title length {min} exceeds maximum {max}")]
    InvalidRules { min: usize, max: usize },
}

impl BoardError {
    /// True for errors caused by a rejected argument to a mutation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidTitleLength { .. } | Self::DueDateInPast { .. } | Self::EmptyEventDescription
        )
    }
}
