//! Page view models (askama templates under `templates/`)

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use shared::models::Employee;

use super::form::EmployeeForm;

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

const RENDER_FAILED_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"es\"><head><meta charset=\"utf-8\">\
<title>Error</title></head><body><h1>Internal server error</h1>\
<p class=\"warning\">The page could not be displayed, please try again later</p>\
<p><a href=\"/empleados\">Volver a la lista</a></p></body></html>";

/// Render a page with the given status; template failures become a plain HTML 500
pub fn render<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => render_failed(&e),
    }
}

fn render_failed(error: &dyn std::fmt::Display) -> Response {
    tracing::error!(error = %error, "Failed to render page");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(RENDER_FAILED_PAGE)).into_response()
}

/// Creation form
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub warning: Option<String>,
}

impl HomePage {
    pub fn new(warning: Option<String>) -> Self {
        Self { warning }
    }
}

/// One row of the employee table, pre-formatted for display
#[derive(Debug, Clone)]
pub struct EmployeeRow {
    pub id: String,
    pub nombre: String,
    pub puesto: String,
    pub departamento: String,
    pub salario: String,
    pub fecha_contratacion: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            nombre: employee.name.clone(),
            puesto: employee.position.clone(),
            departamento: employee.department.clone().unwrap_or_default(),
            salario: format!("{:.2}", employee.salary),
            fecha_contratacion: employee.hire_date.format(DISPLAY_DATE_FORMAT).to_string(),
        }
    }
}

/// Employee list
#[derive(Template)]
#[template(path = "empleados.html")]
pub struct ListPage {
    pub employees: Vec<EmployeeRow>,
    pub warning: Option<String>,
}

impl ListPage {
    pub fn new(employees: &[Employee], warning: Option<String>) -> Self {
        Self {
            employees: employees.iter().map(EmployeeRow::from).collect(),
            warning,
        }
    }
}

/// What the edit page can show for the requested id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Editing,
    Missing,
    /// The record could not be read; only the warning is shown
    Unavailable,
}

/// Edit form
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditPage {
    pub id: String,
    pub state: EditState,
    pub form: EmployeeForm,
    pub warning: Option<String>,
}

impl EditPage {
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            state: EditState::Editing,
            form: EmployeeForm::from_employee(employee),
            warning: None,
        }
    }

    /// Re-render the submitted values with a warning
    pub fn with_form(id: impl Into<String>, form: EmployeeForm, warning: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: EditState::Editing,
            form,
            warning: Some(warning.into()),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: EditState::Missing,
            form: EmployeeForm::default(),
            warning: None,
        }
    }

    pub fn unavailable(id: impl Into<String>, warning: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: EditState::Unavailable,
            form: EmployeeForm::default(),
            warning: Some(warning.into()),
        }
    }
}
