//! In-memory `EmployeeStore` for driving the router without PostgreSQL

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use employee_server::db::{EmployeeStore, EmployeeUpdate, Page};
use employee_server::error::{ServiceError, ServiceResult};
use employee_server::{AppState, api};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::models::Employee;
use tower::ServiceExt;

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Employee>,
}

/// Mirrors the PostgreSQL gateway semantics on a `BTreeMap`
#[derive(Clone, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
    calls: Arc<AtomicUsize>,
}

impl MemoryStore {
    /// Number of store operations invoked so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn create_employee(&self, employee: Employee) -> ServiceResult<i32> {
        self.touch();
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(id, Employee { id, ..employee });
        Ok(id)
    }

    async fn get_employee_by_id(&self, id: i32) -> ServiceResult<Employee> {
        self.touch();
        let table = self.table.lock().unwrap();
        table.rows.get(&id).cloned().ok_or(ServiceError::NotFound(id))
    }

    async fn update_employee(&self, employee: Employee) -> ServiceResult<Employee> {
        self.touch();
        let update = EmployeeUpdate::new(employee.id, employee.changes())?;
        let changes = employee.changes();
        let mut table = self.table.lock().unwrap();
        let row = table
            .rows
            .get_mut(&update.id())
            .ok_or(ServiceError::Store(sqlx::Error::RowNotFound))?;
        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(position) = changes.position {
            row.position = position;
        }
        if let Some(salary) = changes.salary {
            row.salary = salary;
        }
        Ok(row.clone())
    }

    async fn delete_employee_by_id(&self, id: i32) -> ServiceResult<()> {
        self.touch();
        self.table.lock().unwrap().rows.remove(&id);
        Ok(())
    }

    async fn list_employees(&self, page: &str, limit: &str) -> ServiceResult<Vec<Employee>> {
        self.touch();
        let page = Page::parse(page, limit)?;
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .values()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }
}

pub fn app(store: &MemoryStore) -> Router {
    api::create_router(AppState::new(store.clone()))
}

/// Send one request through the router and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
