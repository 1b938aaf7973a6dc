//! Employee Model
//!
//! The wire format keeps the Spanish field names the API has always exposed
//! (`nombre`, `puesto`, `departamento`, `salario`, `fecha_contratacion`);
//! the Rust side uses English names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{AppError, AppResult, ErrorCode};

/// Wire names of the employee fields, used in validation messages.
pub mod field {
    pub const NAME: &str = "nombre";
    pub const POSITION: &str = "puesto";
    pub const DEPARTMENT: &str = "departamento";
    pub const SALARY: &str = "salario";
    pub const HIRE_DATE: &str = "fecha_contratacion";
}

/// Longest accepted `nombre` / `puesto` / `departamento`, in characters
pub const MAX_TEXT_LEN: usize = 200;

/// Store-assigned employee identifier (UUID v4, never reused)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Persisted employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puesto")]
    pub position: String,
    #[serde(rename = "departamento", default)]
    pub department: Option<String>,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "fecha_contratacion")]
    pub hire_date: NaiveDate,
}

/// Validated employee attributes, everything except the identifier
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub position: String,
    pub department: Option<String>,
    pub salary: f64,
    pub hire_date: NaiveDate,
}

/// Create employee payload (REST)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puesto")]
    pub position: String,
    #[serde(rename = "departamento", default)]
    pub department: Option<String>,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "fecha_contratacion")]
    pub hire_date: NaiveDate,
}

/// Update employee payload (REST), merged field by field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "puesto", default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(rename = "departamento", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "salario", default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(
        rename = "fecha_contratacion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hire_date: Option<NaiveDate>,
}

/// Reject hire dates strictly after `today`
pub fn check_hire_date(hire_date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if hire_date > today {
        return Err(AppError::new(ErrorCode::HireDateInFuture)
            .with_detail("field", field::HIRE_DATE)
            .with_detail("value", hire_date.to_string()));
    }
    Ok(())
}

fn check_text_len(value: &str, name: &str) -> AppResult<()> {
    let len = value.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(AppError::out_of_range(
            name,
            format!("{name} is too long ({len} chars, max {MAX_TEXT_LEN})"),
        ));
    }
    Ok(())
}

fn required_text(value: &str, name: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::required_field(name));
    }
    check_text_len(value, name)?;
    Ok(value.to_string())
}

impl EmployeeFields {
    /// Normalize and validate the attributes against `today`
    ///
    /// Names are trimmed, a blank department becomes `None`.
    pub fn validate(self, today: NaiveDate) -> AppResult<Self> {
        let name = required_text(&self.name, field::NAME)?;
        let position = required_text(&self.position, field::POSITION)?;
        let department = self
            .department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(d) = &department {
            check_text_len(d, field::DEPARTMENT)?;
        }

        if !self.salary.is_finite() {
            return Err(AppError::invalid_format(
                field::SALARY,
                "Salary must be a number",
            ));
        }
        if self.salary < 0.0 {
            return Err(AppError::out_of_range(
                field::SALARY,
                "Salary cannot be negative",
            ));
        }
        check_hire_date(self.hire_date, today)?;

        Ok(Self {
            name,
            position,
            department,
            salary: self.salary,
            hire_date: self.hire_date,
        })
    }
}

impl EmployeeCreate {
    /// Parse-then-construct: turn the request body into validated fields
    pub fn into_fields(self, today: NaiveDate) -> AppResult<EmployeeFields> {
        EmployeeFields {
            name: self.name,
            position: self.position,
            department: self.department,
            salary: self.salary,
            hire_date: self.hire_date,
        }
        .validate(today)
    }
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.hire_date.is_none()
    }
}

impl Employee {
    pub fn from_fields(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            position: fields.position,
            department: fields.department,
            salary: fields.salary,
            hire_date: fields.hire_date,
        }
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary,
            hire_date: self.hire_date,
        }
    }

    /// Shallow merge: supplied fields overwrite, absent fields are left untouched
    pub fn merge(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(department) = update.department {
            self.department = Some(department);
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
        if let Some(hire_date) = update.hire_date {
            self.hire_date = hire_date;
        }
    }
}
