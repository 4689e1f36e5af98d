//! Session module
//!
//! Keeps the signed-in user id (and the home-screen sort mode) across runs.

mod file_store;
mod model;

pub use file_store::FileSessionStore;
pub use model::{Session, SessionStore};
