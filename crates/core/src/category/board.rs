//! Home-screen category state
//!
//! The board owns both the loaded categories and the orderer. Controls that
//! change the sort mode receive the board explicitly.

use super::model::{count_tasks, Category};
use super::order::{CategoryOrderer, SortMode};
use crate::task::Task;

#[derive(Debug, Clone, Default)]
pub struct CategoryBoard {
    categories: Vec<Category>,
    orderer: CategoryOrderer,
}

impl CategoryBoard {
    /// Built-in categories merged with the custom ones fetched for the user
    pub fn with_custom(mode: SortMode, custom: Vec<Category>) -> Self {
        let mut categories = Category::defaults();
        categories.extend(custom.into_iter().filter(|c| !c.is_all()));
        Self {
            categories,
            orderer: CategoryOrderer::new(mode),
        }
    }

    pub fn mode(&self) -> SortMode {
        self.orderer.mode()
    }

    pub fn set_mode(&mut self, mode: SortMode) {
        self.orderer.set_mode(mode);
    }

    /// Advance the sort mode and return the new one
    pub fn cycle_sort(&mut self) -> SortMode {
        self.orderer.cycle()
    }

    /// Recompute task counts from a freshly loaded task list
    pub fn refresh_counts(&mut self, tasks: &[Task]) {
        self.categories = count_tasks(&self.categories, tasks);
    }

    /// Categories in display order for the current mode
    pub fn ordered(&self) -> Vec<Category> {
        self.orderer.order(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ALL_CATEGORY;

    #[test]
    fn test_board_merges_defaults_with_custom() {
        let board = CategoryBoard::with_custom(
            SortMode::Standard,
            vec![Category::custom(4, "Garden"), Category::custom(2, "Books")],
        );
        let ordered = board.ordered();
        assert_eq!(ordered.len(), 9);
        assert!(ordered[0].is_all());
        assert_eq!(ordered[1].display_name(), "Work");
        assert_eq!(ordered[7].display_name(), "Books");
        assert_eq!(ordered[8].display_name(), "Garden");
    }

    #[test]
    fn test_board_drops_server_supplied_all() {
        let mut duplicate = Category::custom(99, ALL_CATEGORY);
        duplicate.kind = crate::category::CategoryKind::Predefined;
        let board = CategoryBoard::with_custom(SortMode::Recent, vec![duplicate]);
        assert_eq!(board.ordered().iter().filter(|c| c.is_all()).count(), 1);
    }

    #[test]
    fn test_cycle_sort_reorders() {
        let mut board =
            CategoryBoard::with_custom(SortMode::Standard, vec![Category::custom(1, "Garden")]);
        assert_eq!(board.ordered().last().unwrap().display_name(), "Garden");

        assert_eq!(board.cycle_sort(), SortMode::Recent);
        assert_eq!(board.ordered()[1].display_name(), "Garden");

        assert_eq!(board.cycle_sort(), SortMode::Alphabetical);
        assert_eq!(board.ordered()[1].display_name(), "Garden");
        assert_eq!(board.ordered()[2].display_name(), "Hobby");
    }

    #[test]
    fn test_refresh_counts() {
        let mut board = CategoryBoard::with_custom(SortMode::Standard, Vec::new());
        board.refresh_counts(&[
            Task::new(1, "Pack", "bags", "Travel"),
            Task::new(2, "Pack", "bags", ALL_CATEGORY),
        ]);
        let ordered = board.ordered();
        assert_eq!(ordered[0].task_count, 1);
        let travel = ordered.iter().find(|c| c.display_name() == "Travel").unwrap();
        assert_eq!(travel.task_count, 1);
    }
}
