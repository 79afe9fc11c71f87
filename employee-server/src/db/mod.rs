//! Database access layer
//!
//! - [`client`]: connection manager (connect with retry, ping, close)
//! - [`gateway`]: PostgreSQL implementation of [`EmployeeStore`]
//! - [`update`]: parameterized UPDATE construction
//! - [`page`]: page/limit parsing and offset math

pub mod client;
pub mod gateway;
pub mod page;
pub mod update;

pub use client::{ConnectError, PgClient, RetryPolicy};
pub use gateway::PgEmployeeGateway;
pub use page::Page;
pub use update::{EmployeeField, EmployeeUpdate};

use async_trait::async_trait;
use shared::models::Employee;

use crate::error::ServiceResult;

/// Persistence operations on the `employees` table
///
/// Handlers only see this trait; the production implementation is
/// [`PgEmployeeGateway`].
#[async_trait]
pub trait EmployeeStore: Send + Sync + 'static {
    /// Insert a new row and return the store-assigned id
    async fn create_employee(&self, employee: Employee) -> ServiceResult<i32>;

    /// Fetch one row, `ServiceError::NotFound` when absent
    async fn get_employee_by_id(&self, id: i32) -> ServiceResult<Employee>;

    /// Overwrite the non-empty fields of `employee` and return the stored row
    async fn update_employee(&self, employee: Employee) -> ServiceResult<Employee>;

    /// Delete by id; deleting a missing row is not an error
    async fn delete_employee_by_id(&self, id: i32) -> ServiceResult<()>;

    /// One page of rows ordered by id; `page` and `limit` are raw path segments
    async fn list_employees(&self, page: &str, limit: &str) -> ServiceResult<Vec<Employee>>;
}
