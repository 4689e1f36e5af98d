//! Category display ordering
//!
//! `All` is always pinned first; the remaining categories are ordered by the
//! selected [`SortMode`]. Sorting is stable, so categories that compare equal
//! keep their input order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::model::Category;
use crate::{Error, Result};

/// Home-screen sort mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Case-insensitive by name
    Alphabetical,
    /// Built-in categories in reference order, then custom ones oldest first
    #[default]
    Standard,
    /// Custom categories newest first, then built-in ones in reference order
    Recent,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [Self::Alphabetical, Self::Standard, Self::Recent];

    /// Advance alphabetical -> standard -> recent -> alphabetical
    pub fn next(self) -> Self {
        match self {
            Self::Alphabetical => Self::Standard,
            Self::Standard => Self::Recent,
            Self::Recent => Self::Alphabetical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::Standard => "standard",
            Self::Recent => "recent",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid(format!("unknown sort mode: {}", s)))
    }
}

/// Orders categories for display under an explicitly owned sort mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryOrderer {
    mode: SortMode,
}

impl CategoryOrderer {
    pub fn new(mode: SortMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SortMode) {
        self.mode = mode;
    }

    /// Move to the next mode and return it
    pub fn cycle(&mut self) -> SortMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Return a new ordered list; the input is left untouched
    pub fn order(&self, categories: &[Category]) -> Vec<Category> {
        let (mut ordered, mut rest): (Vec<Category>, Vec<Category>) =
            categories.iter().cloned().partition(Category::is_all);

        match self.mode {
            SortMode::Alphabetical => {
                rest.sort_by_cached_key(|c| c.display_name().to_lowercase());
            }
            SortMode::Standard => rest.sort_by(compare_standard),
            SortMode::Recent => rest.sort_by(compare_recent),
        }

        ordered.append(&mut rest);
        ordered
    }
}

/// Built-in categories by reference rank; unlisted names sort last
fn compare_reference(a: &Category, b: &Category) -> Ordering {
    match (a.standard_rank(), b.standard_rank()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_standard(a: &Category, b: &Category) -> Ordering {
    match (a.is_predefined(), b.is_predefined()) {
        (true, true) => compare_reference(a, b),
        (false, false) => a.id.cmp(&b.id),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
    }
}

// Custom before built-in here, the reverse of `compare_standard`.
fn compare_recent(a: &Category, b: &Category) -> Ordering {
    match (a.is_predefined(), b.is_predefined()) {
        (true, true) => compare_reference(a, b),
        (false, false) => b.id.cmp(&a.id),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CategoryKind, PredefinedCategory};

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(Category::display_name).collect()
    }

    fn sample() -> Vec<Category> {
        vec![
            Category::custom(12, "garden"),
            Category::predefined(PredefinedCategory::Hobby),
            Category::predefined(PredefinedCategory::Work),
            Category::custom(30, "Books"),
            Category::predefined(PredefinedCategory::All),
            Category::predefined(PredefinedCategory::Study),
        ]
    }

    fn order(categories: &[Category], mode: SortMode) -> Vec<Category> {
        CategoryOrderer::new(mode).order(categories)
    }

    #[test]
    fn test_all_is_pinned_first_in_every_mode() {
        for mode in SortMode::ALL {
            let ordered = order(&sample(), mode);
            assert!(ordered[0].is_all(), "mode {} did not pin All", mode);
            assert_eq!(ordered.iter().filter(|c| c.is_all()).count(), 1);
        }
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let ordered = order(&sample(), SortMode::Alphabetical);
        assert_eq!(
            names(&ordered),
            vec!["All", "Books", "garden", "Hobby", "Study", "Work"]
        );
        for pair in ordered[1..].windows(2) {
            assert!(
                pair[0].display_name().to_lowercase() <= pair[1].display_name().to_lowercase()
            );
        }
    }

    #[test]
    fn test_standard_puts_predefined_before_custom() {
        let ordered = order(&sample(), SortMode::Standard);
        assert_eq!(
            names(&ordered),
            vec!["All", "Work", "Study", "Hobby", "garden", "Books"]
        );
    }

    #[test]
    fn test_recent_puts_custom_before_predefined() {
        let ordered = order(&sample(), SortMode::Recent);
        assert_eq!(
            names(&ordered),
            vec!["All", "Books", "garden", "Work", "Study", "Hobby"]
        );
    }

    #[test]
    fn test_standard_and_recent_disagree_on_kind_precedence() {
        let input = vec![
            Category::custom(1, "Garden"),
            Category::predefined(PredefinedCategory::Music),
        ];
        let standard = order(&input, SortMode::Standard);
        let recent = order(&input, SortMode::Recent);

        assert_eq!(standard[0].kind, CategoryKind::Predefined);
        assert_eq!(recent[0].kind, CategoryKind::Custom);
        assert_ne!(names(&standard), names(&recent));
    }

    #[test]
    fn test_unlisted_predefined_names_sort_after_listed_ones() {
        let mut odd = Category::predefined(PredefinedCategory::Work);
        odd.name = Some("Errands".to_string());
        let input = vec![odd, Category::predefined(PredefinedCategory::Home)];

        for mode in [SortMode::Standard, SortMode::Recent] {
            assert_eq!(names(&order(&input, mode)), vec!["Home", "Errands"]);
        }
    }

    #[test]
    fn test_missing_name_sorts_as_empty_string() {
        let mut nameless = Category::custom(9, "");
        nameless.name = None;
        let input = vec![Category::custom(3, "alpha"), nameless];

        let ordered = order(&input, SortMode::Alphabetical);
        assert_eq!(names(&ordered), vec!["", "alpha"]);
    }

    #[test]
    fn test_empty_and_single_inputs() {
        for mode in SortMode::ALL {
            assert!(order(&[], mode).is_empty());
            let single = vec![Category::custom(4, "Solo")];
            assert_eq!(order(&single, mode), single);
        }
    }

    #[test]
    fn test_order_does_not_mutate_input() {
        let input = sample();
        let before = input.clone();
        let _ = order(&input, SortMode::Recent);
        assert_eq!(input, before);
    }

    #[test]
    fn test_next_mode_cycles_in_three_steps() {
        assert_eq!(SortMode::Alphabetical.next(), SortMode::Standard);
        assert_eq!(SortMode::Standard.next(), SortMode::Recent);
        assert_eq!(SortMode::Recent.next(), SortMode::Alphabetical);
        for mode in SortMode::ALL {
            assert_eq!(mode.next().next().next(), mode);
        }
    }

    #[test]
    fn test_orderer_cycle_updates_mode() {
        let mut orderer = CategoryOrderer::new(SortMode::Recent);
        assert_eq!(orderer.cycle(), SortMode::Alphabetical);
        assert_eq!(orderer.mode(), SortMode::Alphabetical);
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("Recent".parse::<SortMode>().unwrap(), SortMode::Recent);
        assert_eq!(SortMode::Alphabetical.to_string(), "alphabetical");
        assert!("newest".parse::<SortMode>().is_err());
        assert_eq!(SortMode::default(), SortMode::Standard);
    }
}
