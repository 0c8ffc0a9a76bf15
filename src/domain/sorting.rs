use crate::{domain::item::BoardItem, error::BoardError};
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for sorting board items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Status,
    DueDate,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "status" => Ok(SortField::Status),
            "due" | "due-date" => Ok(SortField::DueDate),
            _ => Err(BoardError::InvalidSortField(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(BoardError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Sorts board items in place by the given field and direction
///
/// The sort is stable, so items comparing equal keep their board order.
///
/// # Examples
/// ```
/// use boardr_core::domain::sorting::{sort_items, SortField, SortOrder};
/// use boardr_core::BoardItem;
/// use chrono::NaiveDate;
/// use mockable::DefaultClock;
///
/// let due = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
/// let mut items = vec![
///     BoardItem::new("Write docs", due, &DefaultClock),
///     BoardItem::new("Add tests", due, &DefaultClock),
/// ];
///
/// sort_items(&mut items, SortField::Title, SortOrder::Ascending);
/// assert_eq!(items[0].title(), "Add tests");
/// ```
pub fn sort_items(items: &mut [BoardItem], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| compare_items(a, b, field, order));
}

/// Compares two items by field, reversed for descending order
pub(crate) fn compare_items(
    a: &BoardItem,
    b: &BoardItem,
    field: SortField,
    order: SortOrder,
) -> Ordering {
    let cmp = match field {
        SortField::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
        // Lifecycle order, not alphabetical
        SortField::Status => a.status().ordinal().cmp(&b.status().ordinal()),
        SortField::DueDate => a.due_date().cmp(&b.due_date()),
    };

    match order {
        SortOrder::Ascending => cmp,
        SortOrder::Descending => cmp.reverse(),
    }
}
