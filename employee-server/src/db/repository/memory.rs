//! In-process employee store
//!
//! DashMap-backed, nothing survives a restart. Used by `STORE_BACKEND=memory`
//! and by the test suites.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{Employee, EmployeeFields, EmployeeId};

use super::{EmployeeStore, StoreResult, sort_employees};

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<EmployeeId, Employee>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        let mut employees: Vec<Employee> =
            self.records.iter().map(|entry| entry.value().clone()).collect();
        sort_employees(&mut employees);
        Ok(employees)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> StoreResult<Option<Employee>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, fields: EmployeeFields) -> StoreResult<Employee> {
        let employee = Employee::from_fields(EmployeeId::generate(), fields);
        self.records.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        fields: EmployeeFields,
    ) -> StoreResult<Option<Employee>> {
        Ok(self.records.get_mut(id).map(|mut entry| {
            *entry = Employee::from_fields(*id, fields);
            entry.clone()
        }))
    }

    async fn delete(&self, id: &EmployeeId) -> StoreResult<bool> {
        Ok(self.records.remove(id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
