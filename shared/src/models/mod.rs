//! Domain models shared by the server and its clients

pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeFields, EmployeeId, EmployeeUpdate};
