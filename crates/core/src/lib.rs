//! Core library for the Todo Summary Assistant
//!
//! This crate contains the domain logic behind the HTTP service:
//! - Task model and the storage seam (hosted and in-process stores)
//! - The summarize workflow and its text-generation / webhook clients

pub mod error;
pub mod summary;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
