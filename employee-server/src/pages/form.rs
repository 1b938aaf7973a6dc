//! Urlencoded employee form

use chrono::NaiveDate;
use serde::Deserialize;
use shared::models::employee::{check_hire_date, field};
use shared::models::{Employee, EmployeeFields};

use crate::utils::{AppError, AppResult};

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form submission; every field arrives as text
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub puesto: String,
    #[serde(default)]
    pub departamento: String,
    #[serde(default)]
    pub salario: String,
    #[serde(default)]
    pub fecha_contratacion: String,
}

impl EmployeeForm {
    /// Pre-fill from a stored record
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            nombre: employee.name.clone(),
            puesto: employee.position.clone(),
            departamento: employee.department.clone().unwrap_or_default(),
            salario: employee.salary.to_string(),
            fecha_contratacion: employee.hire_date.format(INPUT_DATE_FORMAT).to_string(),
        }
    }

    /// Parse and validate against `today`
    ///
    /// The hire date is checked before anything else.
    pub fn to_fields(&self, today: NaiveDate) -> AppResult<EmployeeFields> {
        let hire_date =
            NaiveDate::parse_from_str(self.fecha_contratacion.trim(), INPUT_DATE_FORMAT).map_err(
                |_| AppError::invalid_format(field::HIRE_DATE, "Hire date must be a date (YYYY-MM-DD)"),
            )?;
        check_hire_date(hire_date, today)?;

        let salary: f64 = self
            .salario
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_format(field::SALARY, "Salary must be a number"))?;

        if self.departamento.trim().is_empty() {
            return Err(AppError::required_field(field::DEPARTMENT));
        }

        EmployeeFields {
            name: self.nombre.clone(),
            position: self.puesto.clone(),
            department: Some(self.departamento.clone()),
            salary,
            hire_date,
        }
        .validate(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn form() -> EmployeeForm {
        EmployeeForm {
            nombre: "Ana".into(),
            puesto: "Dev".into(),
            departamento: "Eng".into(),
            salario: "50000".into(),
            fecha_contratacion: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let fields = form().to_fields(today()).unwrap();
        assert_eq!(fields.salary, 50000.0);
        assert_eq!(fields.department.as_deref(), Some("Eng"));
    }

    #[test]
    fn test_future_date_checked_first() {
        let mut input = form();
        input.fecha_contratacion = "2024-06-02".into();
        input.salario = "lots".into();
        let err = input.to_fields(today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::HireDateInFuture);
    }

    #[test]
    fn test_non_numeric_salary_rejected() {
        let mut input = form();
        input.salario = "abc".into();
        let err = input.to_fields(today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);

        input.salario = "NaN".into();
        let err = input.to_fields(today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_department_required() {
        let mut input = form();
        input.departamento = "  ".into();
        let err = input.to_fields(today()).unwrap_err();
        assert_eq!(err.message, "departamento is required");
    }

    #[test]
    fn test_unparseable_date() {
        let mut input = form();
        input.fecha_contratacion = "01/01/2024".into();
        let err = input.to_fields(today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
