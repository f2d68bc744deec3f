//! Test stores and request helpers shared by the router tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use expenses_server::{
    build_router, AppState, DbError, Expense, ExpenseInput, ExpenseStore, ServerConfig,
};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory store with PostgreSQL-like id assignment (1, 2, 3, ...)
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    last_id: i32,
    rows: BTreeMap<i32, Expense>,
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    async fn create(&self, input: ExpenseInput) -> Result<Expense, DbError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let expense = input.into_expense(inner.last_id);
        inner.rows.insert(expense.id, expense.clone());
        Ok(expense)
    }

    async fn list(&self) -> Result<Vec<Expense>, DbError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Expense, DbError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::expense_not_found(id))
    }

    async fn update(&self, id: i32, input: ExpenseInput) -> Result<Expense, DbError> {
        let mut inner = self.inner.lock().unwrap();
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or_else(|| DbError::expense_not_found(id))?;
        *row = input.into_expense(id);
        Ok(row.clone())
    }
}

/// Store whose every operation fails like a dropped connection
pub struct FailingStore;

#[async_trait]
impl ExpenseStore for FailingStore {
    async fn create(&self, _input: ExpenseInput) -> Result<Expense, DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn list(&self) -> Result<Vec<Expense>, DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn get(&self, _id: i32) -> Result<Expense, DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn update(&self, _id: i32, _input: ExpenseInput) -> Result<Expense, DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }
}

/// Store that panics on list, for exercising the recovery layer
pub struct PanickingStore;

#[async_trait]
impl ExpenseStore for PanickingStore {
    async fn create(&self, input: ExpenseInput) -> Result<Expense, DbError> {
        Ok(input.into_expense(1))
    }

    async fn list(&self) -> Result<Vec<Expense>, DbError> {
        panic!("list exploded");
    }

    async fn get(&self, id: i32) -> Result<Expense, DbError> {
        Err(DbError::expense_not_found(id))
    }

    async fn update(&self, id: i32, _input: ExpenseInput) -> Result<Expense, DbError> {
        Err(DbError::expense_not_found(id))
    }
}

pub fn app(store: impl ExpenseStore + 'static) -> Router {
    build_router(AppState::new(store), &ServerConfig::default())
}

pub fn bunny() -> Value {
    serde_json::json!({
        "title": "New Stuff",
        "amount": 70,
        "note": "Bunny",
        "tags": ["rabbit", "young"]
    })
}

/// Send one request and decode the JSON response body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, "November 10, 2009");

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn create(app: &Router, body: &Value) -> Expense {
    let (status, value) = send(app, Method::POST, "/expenses", Some(body.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_value(value).unwrap()
}
