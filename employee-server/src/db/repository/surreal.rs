//! SurrealDB Employee Repository
//!
//! Records live in the `employee` table keyed by the UUID string. The UUID is
//! also kept in the `uid` field so rows decode without touching the record id.

use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use shared::models::{Employee, EmployeeFields, EmployeeId};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use super::{EmployeeStore, StoreError, StoreResult, sort_employees};

const TABLE: &str = "employee";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored row shape
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    uid: String,
    nombre: String,
    puesto: String,
    #[serde(default)]
    departamento: Option<String>,
    salario: f64,
    fecha_contratacion: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = StoreError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let id: EmployeeId = row.uid.parse().map_err(|e| StoreError::Corrupt {
            id: row.uid.clone(),
            reason: format!("invalid uid: {}", e),
        })?;
        let hire_date = NaiveDate::parse_from_str(&row.fecha_contratacion, DATE_FORMAT)
            .map_err(|e| StoreError::Corrupt {
                id: row.uid.clone(),
                reason: format!("invalid fecha_contratacion: {}", e),
            })?;

        Ok(Employee {
            id,
            name: row.nombre,
            position: row.puesto,
            department: row.departamento,
            salary: row.salario,
            hire_date,
        })
    }
}

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Db>,
}

impl SurrealStore {
    /// Open (or create) an on-disk RocksDB-backed store
    pub async fn open(path: &Path, namespace: &str, database: &str) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let endpoint = path.to_string_lossy().into_owned();
        let db = Surreal::new::<RocksDb>(endpoint).await?;
        db.use_ns(namespace).use_db(database).await?;

        tracing::info!(path = %path.display(), namespace, database, "SurrealDB store opened");
        Ok(Self { db })
    }

    /// Embedded in-memory engine, same query paths as the on-disk store
    pub async fn in_memory(namespace: &str, database: &str) -> StoreResult<Self> {
        let db = Surreal::new::<Mem>(()).await?;
        db.use_ns(namespace).use_db(database).await?;
        Ok(Self { db })
    }

    async fn write(
        &self,
        query: &str,
        id: &EmployeeId,
        fields: EmployeeFields,
    ) -> StoreResult<Option<Employee>> {
        let mut result = self
            .db
            .query(query)
            .bind(("table", TABLE))
            .bind(("uid", id.to_string()))
            .bind(("nombre", fields.name))
            .bind(("puesto", fields.position))
            .bind(("departamento", fields.department))
            .bind(("salario", fields.salary))
            .bind(("fecha", fields.hire_date.format(DATE_FORMAT).to_string()))
            .await?
            .check()?;

        let row: Option<EmployeeRow> = result.take(0)?;
        row.map(Employee::try_from).transpose()
    }
}

#[async_trait]
impl EmployeeStore for SurrealStore {
    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        let rows: Vec<EmployeeRow> = self
            .db
            .query("SELECT * FROM type::table($table)")
            .bind(("table", TABLE))
            .await?
            .take(0)?;

        let mut employees = rows
            .into_iter()
            .map(Employee::try_from)
            .collect::<StoreResult<Vec<_>>>()?;
        sort_employees(&mut employees);
        Ok(employees)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> StoreResult<Option<Employee>> {
        let row: Option<EmployeeRow> = self.db.select((TABLE, id.to_string())).await?;
        row.map(Employee::try_from).transpose()
    }

    async fn create(&self, fields: EmployeeFields) -> StoreResult<Employee> {
        let id = EmployeeId::generate();
        self.write(
            r#"CREATE type::thing($table, $uid) SET
                uid = $uid,
                nombre = $nombre,
                puesto = $puesto,
                departamento = $departamento,
                salario = $salario,
                fecha_contratacion = $fecha
            RETURN AFTER"#,
            &id,
            fields,
        )
        .await?
        .ok_or_else(|| StoreError::Database("Failed to create employee".to_string()))
    }

    async fn update(
        &self,
        id: &EmployeeId,
        fields: EmployeeFields,
    ) -> StoreResult<Option<Employee>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        self.write(
            r#"UPDATE type::thing($table, $uid) SET
                nombre = $nombre,
                puesto = $puesto,
                departamento = $departamento,
                salario = $salario,
                fecha_contratacion = $fecha
            RETURN AFTER"#,
            id,
            fields,
        )
        .await
    }

    async fn delete(&self, id: &EmployeeId) -> StoreResult<bool> {
        let removed: Option<EmployeeRow> = self.db.delete((TABLE, id.to_string())).await?;
        Ok(removed.is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.db
            .health()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn backend(&self) -> &'static str {
        "surrealdb"
    }

    async fn close(&self) -> StoreResult<()> {
        tracing::info!("SurrealDB store closed");
        Ok(())
    }
}
