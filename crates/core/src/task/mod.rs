//! Task module
//!
//! This module contains task types, the paired-row deletion convention and
//! the shared load/delete flows used by category and trash screens.

mod model;
mod pairing;
mod repository;
mod view;

pub use model::*;
pub use pairing::{PairDirection, PairedTaskDeleter, TaskPair};
pub use repository::TaskRepository;
pub use view::{CategoryTasks, TrashView};
