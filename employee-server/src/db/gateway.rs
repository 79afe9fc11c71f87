//! Employee persistence on PostgreSQL

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use shared::models::Employee;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use super::update::EmployeeUpdate;
use super::{EmployeeStore, Page};
use crate::error::{ServiceError, ServiceResult};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        position VARCHAR(255) NOT NULL,
        salary NUMERIC(10, 2) NOT NULL
    )
"#;

const INSERT: &str =
    "INSERT INTO employees (name, position, salary) VALUES ($1, $2, $3) RETURNING id";

const SELECT_BY_ID: &str =
    "SELECT id, name, position, salary::float8 AS salary FROM employees WHERE id = $1";

const SELECT_PAGE: &str = "SELECT id, name, position, salary::float8 AS salary \
     FROM employees ORDER BY id LIMIT $1 OFFSET $2";

const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = $1";

/// [`EmployeeStore`] backed by a PostgreSQL pool
pub struct PgEmployeeGateway {
    pool: PgPool,
    query_timeout: Duration,
    schema: OnceCell<()>,
}

impl PgEmployeeGateway {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
            schema: OnceCell::new(),
        }
    }

    /// Create the `employees` table up front, under the per-call deadline
    pub async fn init_schema(&self) -> ServiceResult<()> {
        self.bounded(self.ensure_schema()).await
    }

    /// Runs the statement at most once per gateway; a failed attempt is
    /// retried on the next call.
    async fn ensure_schema(&self) -> ServiceResult<()> {
        self.schema
            .get_or_try_init(|| async {
                sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
                tracing::debug!("employees table ready");
                Ok::<(), sqlx::Error>(())
            })
            .await?;
        Ok(())
    }

    /// Run one database call under the per-call deadline
    async fn bounded<T>(&self, call: impl Future<Output = ServiceResult<T>>) -> ServiceResult<T> {
        tokio::time::timeout(self.query_timeout, call)
            .await
            .map_err(|_| ServiceError::Timeout(self.query_timeout))?
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeGateway {
    async fn create_employee(&self, employee: Employee) -> ServiceResult<i32> {
        self.bounded(async {
            self.ensure_schema().await?;

            let id: i32 = sqlx::query_scalar(INSERT)
                .bind(&employee.name)
                .bind(&employee.position)
                .bind(employee.salary)
                .fetch_one(&self.pool)
                .await?;

            tracing::info!(employee_id = id, "Employee created");
            Ok::<_, ServiceError>(id)
        })
        .await
    }

    async fn get_employee_by_id(&self, id: i32) -> ServiceResult<Employee> {
        self.bounded(async {
            let employee: Option<Employee> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

            employee.ok_or(ServiceError::NotFound(id))
        })
        .await
    }

    async fn update_employee(&self, employee: Employee) -> ServiceResult<Employee> {
        let update = EmployeeUpdate::new(employee.id, employee.changes())?;

        self.bounded(async {
            let mut query = update.into_query();
            let updated: Employee = query.build_query_as().fetch_one(&self.pool).await?;
            Ok::<_, ServiceError>(updated)
        })
        .await
    }

    async fn delete_employee_by_id(&self, id: i32) -> ServiceResult<()> {
        self.bounded(async {
            let result = sqlx::query(DELETE_BY_ID).bind(id).execute(&self.pool).await?;

            tracing::debug!(
                employee_id = id,
                rows_affected = result.rows_affected(),
                "Employee delete executed"
            );
            Ok::<_, ServiceError>(())
        })
        .await
    }

    async fn list_employees(&self, page: &str, limit: &str) -> ServiceResult<Vec<Employee>> {
        let page = Page::parse(page, limit)?;

        self.bounded(async {
            let employees: Vec<Employee> = sqlx::query_as(SELECT_PAGE)
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?;
            Ok::<_, ServiceError>(employees)
        })
        .await
    }
}
