//! Core library for Taskbox
//!
//! This crate contains the logic shared by every Taskbox front end:
//! - Category model and display ordering
//! - Task model and paired-row deletion
//! - Data-access contracts implemented by the REST client
//! - Local session persistence

pub mod account;
pub mod category;
pub mod error;
pub mod session;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
