//! OpenAPI document for the REST surface, served at `/api-docs`

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api-docs", get(api_docs))
}

async fn api_docs() -> Json<Value> {
    Json(openapi())
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
    })
}

fn employee_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Employee" } } }
    })
}

/// OpenAPI 3.0 document
pub fn openapi() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Employee Records API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Create, list, update and delete employee records"
        },
        "paths": {
            "/api/empleados": collection_path(),
            "/api/empleados/{id}": item_path()
        },
        "components": { "schemas": schemas() }
    })
}

fn collection_path() -> Value {
    let list = json!({
        "summary": "List all employees",
        "responses": {
            "200": {
                "description": "All employees",
                "content": { "application/json": { "schema": {
                    "type": "array",
                    "items": { "$ref": "#/components/schemas/Employee" }
                } } }
            },
            "500": error_response("Store read failure")
        }
    });
    let create = json!({
        "summary": "Create an employee",
        "requestBody": request_body("EmployeeCreate"),
        "responses": {
            "201": employee_response("Created employee"),
            "400": error_response("Malformed body, validation or persistence failure")
        }
    });

    json!({ "get": list, "post": create })
}

fn item_path() -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "Employee identifier (UUID)",
        "schema": { "type": "string", "format": "uuid" }
    });
    let get = json!({
        "summary": "Get an employee",
        "responses": {
            "200": employee_response("Employee"),
            "404": error_response("Employee not found"),
            "500": error_response("Lookup failure")
        }
    });
    let put = json!({
        "summary": "Update an employee (fields omitted from the body are kept)",
        "requestBody": request_body("EmployeeUpdate"),
        "responses": {
            "200": employee_response("Updated employee"),
            "400": error_response("Validation or persistence failure"),
            "404": error_response("Employee not found"),
            "500": error_response("Lookup failure")
        }
    });
    let delete = json!({
        "summary": "Delete an employee",
        "responses": {
            "200": {
                "description": "Employee deleted",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Message" } } }
            },
            "404": error_response("Employee not found"),
            "500": error_response("Lookup or delete failure")
        }
    });

    json!({ "parameters": [id_param], "get": get, "put": put, "delete": delete })
}

fn request_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": {
            "$ref": format!("#/components/schemas/{}", schema)
        } } }
    })
}

fn employee_properties(with_id: bool) -> Value {
    let mut properties = json!({
        "nombre": { "type": "string" },
        "puesto": { "type": "string" },
        "departamento": { "type": "string", "nullable": true },
        "salario": { "type": "number", "minimum": 0 },
        "fecha_contratacion": {
            "type": "string",
            "format": "date",
            "description": "Must not be later than today"
        }
    });
    if with_id {
        properties["id"] = json!({ "type": "string", "format": "uuid" });
    }
    properties
}

fn schemas() -> Value {
    json!({
        "Employee": {
            "type": "object",
            "required": ["id", "nombre", "puesto", "salario", "fecha_contratacion"],
            "properties": employee_properties(true)
        },
        "EmployeeCreate": {
            "type": "object",
            "required": ["nombre", "puesto", "salario", "fecha_contratacion"],
            "properties": employee_properties(false)
        },
        "EmployeeUpdate": {
            "type": "object",
            "properties": employee_properties(false)
        },
        "Message": {
            "type": "object",
            "required": ["message"],
            "properties": {
                "code": { "type": "integer" },
                "message": { "type": "string" }
            }
        },
        "Error": {
            "type": "object",
            "required": ["code", "message"],
            "properties": {
                "code": { "type": "integer" },
                "message": { "type": "string" },
                "details": { "type": "object" }
            }
        }
    })
}
