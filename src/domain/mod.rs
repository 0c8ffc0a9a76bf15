pub mod board;
pub mod event_log;
pub mod item;
pub mod sorting;
pub mod status;

pub use board::{Board, BoardConfig};
pub use event_log::EventLog;
pub use item::{BoardItem, ItemRules};
pub use sorting::{sort_items, SortField, SortOrder};
pub use status::Status;
