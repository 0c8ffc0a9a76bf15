use crate::{
    domain::{event_log::EventLog, status::Status},
    error::{BoardError, Result},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Validation rules applied to board item mutations
///
/// Deserialization goes through [`ItemRules::new`], so a configuration with
/// a minimum title length above the maximum is rejected when it is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItemRules")]
pub struct ItemRules {
    min_title_length: usize,
    max_title_length: usize,
    validate_on_create: bool,
}

/// Unchecked serde form of [`ItemRules`]
#[derive(Deserialize)]
#[serde(default)]
struct RawItemRules {
    min_title_length: usize,
    max_title_length: usize,
    validate_on_create: bool,
}

impl Default for RawItemRules {
    fn default() -> Self {
        let rules = ItemRules::default();
        Self {
            min_title_length: rules.min_title_length,
            max_title_length: rules.max_title_length,
            validate_on_create: rules.validate_on_create,
        }
    }
}

impl TryFrom<RawItemRules> for ItemRules {
    type Error = BoardError;

    fn try_from(raw: RawItemRules) -> Result<Self> {
        let rules = Self::new(raw.min_title_length, raw.max_title_length)?;
        Ok(Self {
            validate_on_create: raw.validate_on_create,
            ..rules
        })
    }
}

impl ItemRules {
    pub const DEFAULT_MIN_TITLE_LENGTH: usize = 5;
    pub const DEFAULT_MAX_TITLE_LENGTH: usize = 30;

    /// Creates rules with custom title bounds
    pub fn new(min_title_length: usize, max_title_length: usize) -> Result<Self> {
        if min_title_length > max_title_length {
            return Err(BoardError::InvalidRules {
                min: min_title_length,
                max: max_title_length,
            });
        }
        Ok(Self {
            min_title_length,
            max_title_length,
            validate_on_create: false,
        })
    }

    pub fn with_validation_on_create(mut self) -> Self {
        self.validate_on_create = true;
        self
    }

    pub fn min_title_length(&self) -> usize {
        self.min_title_length
    }

    pub fn max_title_length(&self) -> usize {
        self.max_title_length
    }

    /// Whether construction also validates title and due date
    pub fn validate_on_create(&self) -> bool {
        self.validate_on_create
    }

    /// Checks a title's character count against the bounds (inclusive)
    pub fn check_title(&self, title: &str) -> Result<()> {
        let length = title.chars().count();
        if length < self.min_title_length || length > self.max_title_length {
            return Err(BoardError::InvalidTitleLength {
                length,
                min: self.min_title_length,
                max: self.max_title_length,
            });
        }
        Ok(())
    }

    /// Rejects dates strictly before the clock's current local date
    pub fn check_due_date(&self, due: NaiveDate, clock: &impl Clock) -> Result<()> {
        let today = clock.local().date_naive();
        if due < today {
            return Err(BoardError::DueDateInPast { due, today });
        }
        Ok(())
    }
}

impl Default for ItemRules {
    fn default() -> Self {
        Self {
            min_title_length: Self::DEFAULT_MIN_TITLE_LENGTH,
            max_title_length: Self::DEFAULT_MAX_TITLE_LENGTH,
            validate_on_create: false,
        }
    }
}

/// A unit of work on a board
///
/// Setters validate their input and leave the item untouched when they
/// return an error. Every applied change is appended to the item's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardItem {
    title: String,
    due_date: NaiveDate,
    status: Status,
    #[serde(default)]
    rules: ItemRules,
    #[serde(default)]
    history: Vec<EventLog>,
}

impl BoardItem {
    /// Creates an item in the `Open` status without validating its fields
    pub fn new(title: impl Into<String>, due_date: NaiveDate, clock: &impl Clock) -> Self {
        let mut item = Self {
            title: title.into(),
            due_date,
            status: Status::Open,
            rules: ItemRules::default(),
            history: Vec::new(),
        };
        item.record(format!("Item created: {}", item.view_info()), clock);
        item
    }

    /// Creates an item governed by `rules`
    ///
    /// When `rules.validate_on_create()` is set, the title and due date are
    /// checked exactly as the setters would check them.
    pub fn with_rules(
        title: impl Into<String>,
        due_date: NaiveDate,
        rules: ItemRules,
        clock: &impl Clock,
    ) -> Result<Self> {
        let title = title.into();
        if rules.validate_on_create() {
            rules.check_title(&title)?;
            rules.check_due_date(due_date, clock)?;
        }

        let mut item = Self::new(title, due_date, clock);
        item.rules = rules;
        Ok(item)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rules(&self) -> &ItemRules {
        &self.rules
    }

    /// Events recorded for this item, oldest first
    pub fn history(&self) -> &[EventLog] {
        &self.history
    }

    /// Replaces the title if its length is within the configured bounds
    pub fn set_title(&mut self, title: impl Into<String>, clock: &impl Clock) -> Result<()> {
        let title = title.into();
        if let Err(err) = self.rules.check_title(&title) {
            debug!(current = %self.title, rejected = %title, "Rejected title change");
            return Err(err);
        }

        let previous = std::mem::replace(&mut self.title, title);
        debug!(from = %previous, to = %self.title, "Title changed");
        self.record(
            format!("Title changed from '{}' to '{}'", previous, self.title),
            clock,
        );
        Ok(())
    }

    /// Replaces the due date unless it lies before today
    pub fn set_due_date(&mut self, due_date: NaiveDate, clock: &impl Clock) -> Result<()> {
        if let Err(err) = self.rules.check_due_date(due_date, clock) {
            debug!(title = %self.title, rejected = %due_date, "Rejected due date change");
            return Err(err);
        }

        let previous = std::mem::replace(&mut self.due_date, due_date);
        debug!(title = %self.title, from = %previous, to = %due_date, "Due date changed");
        self.record(
            format!("Due date changed from {} to {}", previous, due_date),
            clock,
        );
        Ok(())
    }

    /// Moves one step forward in the lifecycle; no-op at `Verified`
    pub fn advance_status(&mut self, clock: &impl Clock) {
        self.change_status(self.status.advance(), clock);
    }

    /// Moves one step back in the lifecycle; no-op at `Open`
    pub fn revert_status(&mut self, clock: &impl Clock) {
        self.change_status(self.status.revert(), clock);
    }

    /// Summary in the form ` 'title', [Status | due date]`
    pub fn view_info(&self) -> String {
        format!(" '{}', [{} | {}]", self.title, self.status, self.due_date)
    }

    /// One line per recorded event
    pub fn view_history(&self) -> String {
        self.history
            .iter()
            .map(EventLog::view_info)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn change_status(&mut self, next: Status, clock: &impl Clock) {
        if next == self.status {
            debug!(title = %self.title, status = %self.status, "Status already at lifecycle boundary");
            return;
        }

        let previous = std::mem::replace(&mut self.status, next);
        debug!(title = %self.title, from = %previous, to = %next, "Status changed");
        self.record(format!("Status changed from {} to {}", previous, next), clock);
    }

    fn record(&mut self, description: String, clock: &impl Clock) {
        self.history.push(EventLog::recorded(description, clock));
    }
}

impl fmt::Display for BoardItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.view_info())
    }
}
