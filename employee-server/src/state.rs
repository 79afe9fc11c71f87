//! Application state shared by every handler

use std::sync::Arc;

use crate::db::EmployeeStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Employee persistence, PostgreSQL in production
    pub employees: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: impl EmployeeStore) -> Self {
        Self {
            employees: Arc::new(store),
        }
    }
}
