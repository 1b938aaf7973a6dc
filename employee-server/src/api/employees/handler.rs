//! Employee API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use super::lookup::FoundEmployee;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult, JsonBody};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .store()
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(employees))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let fields = payload.into_fields(state.today())?;

    let employee = state.store().create(fields).await.map_err(|e| {
        tracing::warn!(error = %e, "Failed to save new employee");
        AppError::save_failed(e.to_string())
    })?;

    tracing::info!(id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Get employee by id
pub async fn get_by_id(FoundEmployee(employee): FoundEmployee) -> Json<Employee> {
    Json(employee)
}

/// Merge the supplied fields onto the stored record
pub async fn update(
    State(state): State<ServerState>,
    FoundEmployee(mut employee): FoundEmployee,
    JsonBody(payload): JsonBody<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    employee.merge(payload);
    let fields = employee.fields().validate(state.today())?;

    let updated = state
        .store()
        .update(&employee.id, fields)
        .await
        .map_err(|e| {
            tracing::warn!(id = %employee.id, error = %e, "Failed to save employee");
            AppError::save_failed(e.to_string())
        })?
        // 查询与写入之间被删除
        .ok_or_else(AppError::employee_not_found)?;

    tracing::info!(id = %updated.id, "Employee updated");
    Ok(Json(updated))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    FoundEmployee(employee): FoundEmployee,
) -> AppResult<ApiResponse> {
    let removed = state
        .store()
        .delete(&employee.id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    if !removed {
        return Err(AppError::employee_not_found());
    }

    tracing::info!(id = %employee.id, "Employee deleted");
    Ok(ApiResponse::message("Employee deleted"))
}
