//! Employee CRUD handlers
//!
//! Each handler validates its input, runs exactly one gateway call through
//! [`dispatch`], and wraps the result in the response envelope. Gateway
//! failures are logged here and nowhere else.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::Serialize;
use shared::error::AppError;
use shared::models::Employee;
use shared::ApiResponse;

use super::dispatch;
use crate::state::AppState;

type ApiResult<T> = Result<ApiResponse<T>, AppError>;

#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub employee_details: Employee,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedEmployeeDetails {
    pub updated_employee_details: Employee,
}

#[derive(Debug, Serialize)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
}

/// POST /api/CreateEmpolyee
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<Created> {
    let Json(employee) = body?;
    employee.validate_for_create()?;

    let store = state.employees.clone();
    let id = dispatch(async move { store.create_employee(employee).await })
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "CreateEmployee: error inserting data in the database");
        })?;

    Ok(ApiResponse::success(Created { id }))
}

/// GET /api/GetEmployeeById/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<EmployeeDetails> {
    let Path(id) = id?;

    let store = state.employees.clone();
    let employee = dispatch(async move { store.get_employee_by_id(id).await })
        .await
        .inspect_err(|e| {
            tracing::error!(employee_id = id, error = %e, "GetEmployeeById: error getting results from DB");
        })?;

    Ok(ApiResponse::success(EmployeeDetails {
        employee_details: employee,
    }))
}

/// PUT /api/UpdateEmployee
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<UpdatedEmployeeDetails> {
    let Json(employee) = body?;
    employee.validate_for_update()?;
    let id = employee.id;

    let store = state.employees.clone();
    let updated = dispatch(async move { store.update_employee(employee).await })
        .await
        .inspect_err(|e| {
            tracing::error!(employee_id = id, error = %e, "UpdateEmployee: error updating data in the database");
        })?;

    Ok(ApiResponse::success(UpdatedEmployeeDetails {
        updated_employee_details: updated,
    }))
}

/// DELETE /api/DeleteEmployee/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;

    let store = state.employees.clone();
    dispatch(async move { store.delete_employee_by_id(id).await })
        .await
        .inspect_err(|e| {
            tracing::error!(employee_id = id, error = %e, "DeleteEmployeeById: error deleting employee from DB");
        })?;

    Ok(ApiResponse::ok())
}

/// GET /api/GetAllEmployees/{page}/{limit}
///
/// Page and limit reach the gateway as raw segments; a non-numeric value is
/// a gateway failure, not a 400.
pub async fn list(
    State(state): State<AppState>,
    segments: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<EmployeeList> {
    let Path((page, limit)) = segments?;

    let store = state.employees.clone();
    let employees = dispatch(async move { store.list_employees(&page, &limit).await })
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "GetAllEmployees: error getting results from DB");
        })?;

    Ok(ApiResponse::success(EmployeeList { employees }))
}
