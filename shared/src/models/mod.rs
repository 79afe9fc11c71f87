//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Ids are `i32` (PostgreSQL `SERIAL`).

pub mod employee;

// Re-exports
pub use employee::*;
