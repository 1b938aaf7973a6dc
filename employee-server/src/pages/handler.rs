//! Form page handlers
//!
//! Every branch answers with exactly one response: a 303 redirect to the list
//! or a rendered page carrying a warning.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use shared::models::EmployeeId;

use super::form::EmployeeForm;
use super::views::{EditPage, HomePage, ListPage, render};
use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

const LIST_PATH: &str = "/empleados";
const LOAD_FAILED: &str = "Could not load employees, please try again later";
const DELETE_FAILED: &str = "Could not delete employee, please try again later";

/// GET / - creation form
pub async fn home() -> Response {
    render(StatusCode::OK, &HomePage::new(None))
}

/// POST /empleados
pub async fn create(State(state): State<ServerState>, Form(form): Form<EmployeeForm>) -> Response {
    let fields = match form.to_fields(state.today()) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::info!(code = %e.code, error = %e, "Employee form rejected");
            return render(e.http_status(), &HomePage::new(Some(e.message)));
        }
    };

    match state.store().create(fields).await {
        Ok(employee) => {
            tracing::info!(id = %employee.id, "Employee created");
            Redirect::to(LIST_PATH).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save employee");
            let warning = ErrorCode::EmployeeSaveFailed.message().to_string();
            render(StatusCode::INTERNAL_SERVER_ERROR, &HomePage::new(Some(warning)))
        }
    }
}

/// GET /empleados
pub async fn list(State(state): State<ServerState>) -> Response {
    list_page(&state, StatusCode::OK, None).await
}

/// GET /empleados/edit/{id}
pub async fn edit(State(state): State<ServerState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<EmployeeId>() else {
        return render(StatusCode::NOT_FOUND, &EditPage::not_found(raw_id));
    };

    match state.store().find_by_id(&id).await {
        Ok(Some(employee)) => render(StatusCode::OK, &EditPage::for_employee(&employee)),
        Ok(None) => render(StatusCode::NOT_FOUND, &EditPage::not_found(raw_id)),
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to load employee");
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                &EditPage::unavailable(raw_id, LOAD_FAILED),
            )
        }
    }
}

/// POST /empleados/update/{id} - overwrites every field
pub async fn update(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    Form(form): Form<EmployeeForm>,
) -> Response {
    let Ok(id) = raw_id.parse::<EmployeeId>() else {
        return render(StatusCode::NOT_FOUND, &EditPage::not_found(raw_id));
    };

    let fields = match form.to_fields(state.today()) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::info!(id = %id, code = %e.code, error = %e, "Employee form rejected");
            return render(e.http_status(), &EditPage::with_form(raw_id, form, e.message));
        }
    };

    match state.store().update(&id, fields).await {
        Ok(Some(_)) => {
            tracing::info!(id = %id, "Employee updated");
            Redirect::to(LIST_PATH).into_response()
        }
        Ok(None) => render(StatusCode::NOT_FOUND, &EditPage::not_found(raw_id)),
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to save employee");
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                &EditPage::with_form(raw_id, form, ErrorCode::EmployeeSaveFailed.message()),
            )
        }
    }
}

/// POST /empleados/delete/{id}
pub async fn delete(State(state): State<ServerState>, Path(raw_id): Path<String>) -> Response {
    let not_found = AppError::employee_not_found();

    let Ok(id) = raw_id.parse::<EmployeeId>() else {
        return list_page(&state, not_found.http_status(), Some(not_found.message)).await;
    };

    match state.store().delete(&id).await {
        Ok(true) => {
            tracing::info!(id = %id, "Employee deleted");
            Redirect::to(LIST_PATH).into_response()
        }
        Ok(false) => list_page(&state, not_found.http_status(), Some(not_found.message)).await,
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to delete employee");
            let warning = Some(DELETE_FAILED.to_string());
            list_page(&state, StatusCode::INTERNAL_SERVER_ERROR, warning).await
        }
    }
}

/// Render the list; a failed read renders an empty table with a warning and 500
async fn list_page(state: &ServerState, status: StatusCode, warning: Option<String>) -> Response {
    match state.store().find_all().await {
        Ok(employees) => render(status, &ListPage::new(&employees, warning)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list employees");
            let warning = match warning {
                Some(w) => format!("{}. {}", w, LOAD_FAILED),
                None => LOAD_FAILED.to_string(),
            };
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ListPage::new(&[], Some(warning)),
            )
        }
    }
}
