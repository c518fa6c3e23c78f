//! Task module
//!
//! This module contains the task model and its storage backends.

mod memory_store;
mod model;
mod repository;
mod supabase;

pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use supabase::{SupabaseConfig, SupabaseTaskStore};
