//! employee-server: CRUD HTTP service for the `employees` table
//!
//! - `db`: connection manager and the PostgreSQL persistence gateway
//! - `api`: axum handlers translating HTTP into gateway calls
//! - `state`: the gateway handle shared by every handler

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;
