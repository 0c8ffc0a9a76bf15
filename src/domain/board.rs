use crate::{
    domain::{
        item::{BoardItem, ItemRules},
        sorting::{compare_items, SortField, SortOrder},
        status::Status,
    },
    error::{BoardError, Result},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub rules: ItemRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            rules: ItemRules::default(),
        }
    }
}

/// An ordered collection of board items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pub config: BoardConfig,
    items: Vec<BoardItem>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }

    /// Adds an existing item and returns its index on the board
    pub fn add_item(&mut self, item: BoardItem) -> usize {
        debug!(board = %self.config.name, title = %item.title(), "Item added");
        self.items.push(item);
        self.items.len() - 1
    }

    /// Builds an item using the board's rules and adds it
    pub fn create_item(
        &mut self,
        title: impl Into<String>,
        due_date: NaiveDate,
        clock: &impl Clock,
    ) -> Result<usize> {
        let item = BoardItem::with_rules(title, due_date, self.config.rules, clock)?;
        Ok(self.add_item(item))
    }

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the item at `index`
    pub fn get_item(&self, index: usize) -> Result<&BoardItem> {
        self.items.get(index).ok_or(BoardError::ItemNotFound(index))
    }

    /// Gets the item at `index` for mutation
    pub fn get_item_mut(&mut self, index: usize) -> Result<&mut BoardItem> {
        self.items
            .get_mut(index)
            .ok_or(BoardError::ItemNotFound(index))
    }

    /// Removes and returns the item at `index`
    pub fn remove_item(&mut self, index: usize) -> Result<BoardItem> {
        if index >= self.items.len() {
            return Err(BoardError::ItemNotFound(index));
        }
        Ok(self.items.remove(index))
    }

    /// Advances every item one lifecycle step
    pub fn advance_all(&mut self, clock: &impl Clock) {
        for item in &mut self.items {
            item.advance_status(clock);
        }
    }

    /// Reverts every item one lifecycle step
    pub fn revert_all(&mut self, clock: &impl Clock) {
        for item in &mut self.items {
            item.revert_status(clock);
        }
    }

    /// Items currently in `status`, in board order
    pub fn items_with_status(&self, status: Status) -> Vec<&BoardItem> {
        self.items
            .iter()
            .filter(|item| item.status() == status)
            .collect()
    }

    /// Items sorted by `field` without reordering the board itself
    pub fn sorted_items(&self, field: SortField, order: SortOrder) -> Vec<&BoardItem> {
        let mut items: Vec<&BoardItem> = self.items.iter().collect();
        items.sort_by(|a, b| compare_items(a, b, field, order));
        items
    }

    /// One summary line per item
    pub fn view_info(&self) -> String {
        self.items
            .iter()
            .map(BoardItem::view_info)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::on(2026, 10, 16)
    }

    fn in_days(days: i64) -> NaiveDate {
        clock().in_days(days)
    }

    fn board() -> Board {
        let mut board = Board::default();
        board.add_item(BoardItem::new(
            "Registration doesn't work",
            in_days(2),
            &clock(),
        ));
        board.add_item(BoardItem::new("Encrypt user data", in_days(10), &clock()));
        board
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert_eq!(board.config.name, "Default Board");
        assert!(board.is_empty());
    }

    #[test]
    fn test_add_item_returns_index() {
        let mut board = board();
        let index = board.add_item(BoardItem::new("Write tests", in_days(1), &clock()));

        assert_eq!(index, 2);
        assert_eq!(board.len(), 3);
        assert_eq!(board.get_item(index).unwrap().title(), "Write tests");
    }

    #[test]
    fn test_get_item_out_of_range() {
        let mut board = board();

        assert_eq!(board.get_item(5).unwrap_err(), BoardError::ItemNotFound(5));
        assert!(board.get_item_mut(2).is_err());
        assert!(board.remove_item(2).is_err());
    }

    #[test]
    fn test_item_mutation_through_board() {
        let mut board = board();

        let item = board.get_item_mut(1).unwrap();
        item.set_title("Encrypt all user data", &clock()).unwrap();

        assert_eq!(board.items()[1].title(), "Encrypt all user data");
    }

    #[test]
    fn test_remove_item() {
        let mut board = board();

        let removed = board.remove_item(0).unwrap();

        assert_eq!(removed.title(), "Registration doesn't work");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_advance_and_revert_all() {
        let mut board = board();
        board.get_item_mut(0).unwrap().advance_status(&clock());

        board.advance_all(&clock());

        assert_eq!(board.items()[0].status(), Status::InProgress);
        assert_eq!(board.items()[1].status(), Status::Todo);

        board.revert_all(&clock());
        board.revert_all(&clock());

        assert_eq!(board.items()[0].status(), Status::Open);
        assert_eq!(board.items()[1].status(), Status::Open);
    }

    #[test]
    fn test_items_with_status() {
        let mut board = board();
        board.get_item_mut(1).unwrap().advance_status(&clock());

        let todo = board.items_with_status(Status::Todo);

        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].title(), "Encrypt user data");
        assert!(board.items_with_status(Status::Done).is_empty());
    }

    #[test]
    fn test_sorted_items_leaves_board_order() {
        let board = board();

        let sorted = board.sorted_items(SortField::DueDate, SortOrder::Descending);

        assert_eq!(sorted[0].title(), "Encrypt user data");
        assert_eq!(board.items()[0].title(), "Registration doesn't work");
    }

    #[test]
    fn test_create_item_uses_board_rules() {
        let config = BoardConfig {
            name: "Strict".to_string(),
            rules: ItemRules::default().with_validation_on_create(),
        };
        let mut board = Board::new(config);

        let err = board.create_item("Bug", in_days(1), &clock()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(board.is_empty());

        let err = board
            .create_item("Fix the login bug", in_days(-1), &clock())
            .unwrap_err();
        assert!(matches!(err, BoardError::DueDateInPast { .. }));

        let index = board
            .create_item("Fix the login bug", in_days(0), &clock())
            .unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_view_info_has_line_per_item() {
        let board = board();

        let info = board.view_info();

        assert_eq!(info.lines().count(), 2);
        assert!(info.contains("'Registration doesn't work', [Open |"));
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"name": "Sprint 1"}"#).unwrap();

        assert_eq!(config.name, "Sprint 1");
        assert_eq!(config.rules, ItemRules::default());
    }

    #[test]
    fn test_config_rejects_inverted_title_bounds() {
        let json = r#"{"name": "Broken", "rules": {"min_title_length": 40}}"#;

        assert!(serde_json::from_str::<BoardConfig>(json).is_err());
    }
}
