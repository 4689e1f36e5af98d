//! Category module
//!
//! This module contains category types, display ordering and the
//! home-screen state that owns the current sort mode.

mod board;
mod model;
mod order;
mod repository;

pub use board::CategoryBoard;
pub use model::*;
pub use order::{CategoryOrderer, SortMode};
pub use repository::CategoryRepository;
