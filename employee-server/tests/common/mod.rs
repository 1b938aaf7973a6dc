//! Shared helpers for the in-process HTTP tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use chrono::{Days, NaiveDate};
use employee_server::core::Config;
use employee_server::db::StoreResult;
use employee_server::{EmployeeStore, MemoryStore, ServerState, StoreError, build_app};
use serde_json::Value;
use shared::models::{Employee, EmployeeFields, EmployeeId};
use tower::ServiceExt;

/// Fully layered app over the given store
pub fn app_with_store(store: Arc<dyn EmployeeStore>) -> Router {
    let mut config = Config::in_memory();
    config.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public");
    build_app(ServerState::new(config, store))
}

/// App over a fresh in-memory store; the store handle is returned for assertions
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app_with_store(store.clone()), store)
}

pub fn failing_app() -> Router {
    app_with_store(Arc::new(FailingStore))
}

/// App whose reads succeed but whose writes misbehave as `writes` says
pub fn flaky_app(writes: Writes) -> (Router, Arc<FlakyStore>) {
    let store = Arc::new(FlakyStore {
        inner: MemoryStore::new(),
        writes,
    });
    (app_with_store(store.clone()), store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn tomorrow() -> String {
    (today() + Days::new(1)).to_string()
}

pub fn ana() -> Value {
    serde_json::json!({
        "nombre": "Ana",
        "puesto": "Dev",
        "departamento": "Eng",
        "salario": 50000,
        "fecha_contratacion": "2024-01-01"
    })
}

pub fn ana_form() -> Vec<(&'static str, String)> {
    vec![
        ("nombre", "Ana".to_string()),
        ("puesto", "Dev".to_string()),
        ("departamento", "Eng".to_string()),
        ("salario", "50000".to_string()),
        ("fecha_contratacion", "2024-01-01".to_string()),
    ]
}

pub fn as_pairs<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

pub fn with_field(
    mut fields: Vec<(&'static str, String)>,
    name: &str,
    value: &str,
) -> Vec<(&'static str, String)> {
    for (k, v) in fields.iter_mut() {
        if *k == name {
            *v = value.to_string();
        }
    }
    fields
}

/// Store whose every call fails
pub struct FailingStore;

fn offline<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("store offline".into()))
}

#[async_trait]
impl EmployeeStore for FailingStore {
    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        offline()
    }

    async fn find_by_id(&self, _id: &EmployeeId) -> StoreResult<Option<Employee>> {
        offline()
    }

    async fn create(&self, _fields: EmployeeFields) -> StoreResult<Employee> {
        offline()
    }

    async fn update(
        &self,
        _id: &EmployeeId,
        _fields: EmployeeFields,
    ) -> StoreResult<Option<Employee>> {
        offline()
    }

    async fn delete(&self, _id: &EmployeeId) -> StoreResult<bool> {
        offline()
    }

    async fn ping(&self) -> StoreResult<()> {
        offline()
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Writes {
    /// Every write returns a store error
    Fail,
    /// The record disappears right before the write lands
    Vanish,
}

/// Real in-memory reads with misbehaving writes
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub writes: Writes,
}

impl FlakyStore {
    pub async fn seed(&self) -> Employee {
        let fields = EmployeeFields {
            name: "Ana".into(),
            position: "Dev".into(),
            department: Some("Eng".into()),
            salary: 50000.0,
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        self.inner.create(fields).await.unwrap()
    }
}

fn write_rejected<T>() -> StoreResult<T> {
    Err(StoreError::Database("write rejected".into()))
}

#[async_trait]
impl EmployeeStore for FlakyStore {
    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &EmployeeId) -> StoreResult<Option<Employee>> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, fields: EmployeeFields) -> StoreResult<Employee> {
        match self.writes {
            Writes::Fail => write_rejected(),
            Writes::Vanish => self.inner.create(fields).await,
        }
    }

    async fn update(
        &self,
        id: &EmployeeId,
        _fields: EmployeeFields,
    ) -> StoreResult<Option<Employee>> {
        match self.writes {
            Writes::Fail => write_rejected(),
            Writes::Vanish => {
                self.inner.delete(id).await?;
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: &EmployeeId) -> StoreResult<bool> {
        match self.writes {
            Writes::Fail => write_rejected(),
            Writes::Vanish => {
                self.inner.delete(id).await?;
                Ok(false)
            }
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "flaky"
    }
}
