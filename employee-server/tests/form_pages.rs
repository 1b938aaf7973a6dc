//! Server-rendered form pages

mod common;

use axum::http::{StatusCode, header};
use common::*;
use employee_server::EmployeeStore;
use shared::models::EmployeeId;

fn location(response: &axum::http::Response<axum::body::Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_home_renders_form() {
    let (app, _store) = memory_app();
    let response = send(&app, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"action="/empleados""#));
    assert!(html.contains(r#"name="fecha_contratacion""#));
    assert!(!html.contains(r#"class="warning""#));
}

#[tokio::test]
async fn test_create_redirects_to_list() {
    let (app, store) = memory_app();
    let fields = ana_form();

    let response = send(&app, form_request("/empleados", &as_pairs(&fields))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/empleados");
    assert_eq!(store.len(), 1);

    let response = send(&app, get("/empleados")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Ana"));
    assert!(html.contains("01/01/2024"));
    assert!(html.contains("50000.00"));
}

#[tokio::test]
async fn test_create_rejects_future_hire_date() {
    let (app, store) = memory_app();
    let fields = with_field(ana_form(), "fecha_contratacion", &tomorrow());

    let response = send(&app, form_request("/empleados", &as_pairs(&fields))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Hire date cannot be later than today"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_rejects_bad_input() {
    let (app, store) = memory_app();

    let fields = with_field(ana_form(), "salario", "cincuenta mil");
    let response = send(&app, form_request("/empleados", &as_pairs(&fields))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Salary must be a number"));

    let fields = with_field(ana_form(), "nombre", "");
    let response = send(&app, form_request("/empleados", &as_pairs(&fields))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("nombre is required"));

    let response = send(&app, form_request("/empleados", &[("nombre", "Ana")])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_edit_page() {
    let (app, store) = memory_app();
    send(&app, form_request("/empleados", &as_pairs(&ana_form()))).await;
    let employee = store.find_all().await.unwrap().remove(0);

    let response = send(&app, get(&format!("/empleados/edit/{}", employee.id))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!("/empleados/update/{}", employee.id)));
    assert!(html.contains(r#"value="2024-01-01""#));
    assert!(html.contains(r#"value="Eng""#));
}

#[tokio::test]
async fn test_edit_unknown_or_malformed_id() {
    let (app, _store) = memory_app();

    for uri in [
        format!("/empleados/edit/{}", EmployeeId::generate()),
        "/empleados/edit/not-a-uuid".to_string(),
    ] {
        let response = send(&app, get(&uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Employee not found"));
    }
}

#[tokio::test]
async fn test_update_overwrites_record() {
    let (app, store) = memory_app();
    send(&app, form_request("/empleados", &as_pairs(&ana_form()))).await;
    let employee = store.find_all().await.unwrap().remove(0);

    let fields = with_field(ana_form(), "puesto", "Lead");
    let fields = with_field(fields, "salario", "65000.5");
    let uri = format!("/empleados/update/{}", employee.id);
    let response = send(&app, form_request(&uri, &as_pairs(&fields))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/empleados");

    let stored = store.find_by_id(&employee.id).await.unwrap().unwrap();
    assert_eq!(stored.position, "Lead");
    assert_eq!(stored.salary, 65000.5);
    assert_eq!(stored.name, "Ana");
}

#[tokio::test]
async fn test_update_rejects_future_hire_date() {
    let (app, store) = memory_app();
    send(&app, form_request("/empleados", &as_pairs(&ana_form()))).await;
    let employee = store.find_all().await.unwrap().remove(0);

    let future = tomorrow();
    let fields = with_field(ana_form(), "nombre", "Ana Updated");
    let fields = with_field(fields, "fecha_contratacion", &future);
    let uri = format!("/empleados/update/{}", employee.id);
    let response = send(&app, form_request(&uri, &as_pairs(&fields))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_text(response).await;
    assert!(html.contains("Hire date cannot be later than today"));
    assert!(html.contains("Ana Updated"));
    assert!(html.contains(&future));

    let stored = store.find_by_id(&employee.id).await.unwrap().unwrap();
    assert_eq!(stored, employee);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (app, store) = memory_app();
    let uri = format!("/empleados/update/{}", EmployeeId::generate());

    let response = send(&app, form_request(&uri, &as_pairs(&ana_form()))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Employee not found"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_delete() {
    let (app, store) = memory_app();
    send(&app, form_request("/empleados", &as_pairs(&ana_form()))).await;
    let employee = store.find_all().await.unwrap().remove(0);
    let uri = format!("/empleados/delete/{}", employee.id);

    let response = send(&app, form_request(&uri, &[])).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/empleados");
    assert!(store.is_empty());

    let response = send(&app, form_request(&uri, &[])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains(r#"class="warning""#));
    assert!(html.contains("Employee not found"));
}

#[tokio::test]
async fn test_store_failures_render_warnings() {
    let app = failing_app();

    let response = send(&app, get("/empleados")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains(r#"class="warning""#));

    let response = send(&app, form_request("/empleados", &as_pairs(&ana_form()))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Failed to save employee"));

    let uri = format!("/empleados/delete/{}", EmployeeId::generate());
    let response = send(&app, form_request(&uri, &[])).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Could not delete employee"));
}

#[tokio::test]
async fn test_edit_page_reports_load_failure() {
    let app = failing_app();
    let response = send(&app, get(&format!("/empleados/edit/{}", EmployeeId::generate()))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let html = body_text(response).await;
    assert!(html.contains(r#"class="warning""#));
    assert!(html.contains("Could not load employees"));
    assert!(!html.contains("Employee not found"));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn test_update_rejected_by_store_keeps_submission() {
    let (app, store) = flaky_app(Writes::Fail);
    let employee = store.seed().await;

    let fields = with_field(ana_form(), "puesto", "Lead");
    let uri = format!("/empleados/update/{}", employee.id);
    let response = send(&app, form_request(&uri, &as_pairs(&fields))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let html = body_text(response).await;
    assert!(html.contains("Failed to save employee"));
    assert!(html.contains(r#"value="Lead""#));
}

#[tokio::test]
async fn test_update_of_record_deleted_meanwhile() {
    let (app, store) = flaky_app(Writes::Vanish);
    let employee = store.seed().await;

    let uri = format!("/empleados/update/{}", employee.id);
    let response = send(&app, form_request(&uri, &as_pairs(&ana_form()))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Employee not found"));
}
