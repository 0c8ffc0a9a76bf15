//! # BoardR Core
//!
//! Domain model for BoardR task boards.
//!
//! Board items move through a fixed five-stage lifecycle
//! (`Open → To Do → In Progress → Done → Verified`), validate their title
//! and due date on every change, and keep a timestamped history of what
//! happened to them. The current date is read through a
//! [`mockable::Clock`], so callers decide where "today" comes from.

pub mod domain;
pub mod error;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig},
    event_log::EventLog,
    item::{BoardItem, ItemRules},
    sorting::{SortField, SortOrder},
    status::Status,
};
pub use error::{BoardError, Result};
