//! 表单页面 (服务端渲染)
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | GET | / | 新建表单 |
//! | POST | /empleados | 创建员工 |
//! | GET | /empleados | 员工列表 |
//! | GET | /empleados/edit/{id} | 编辑表单 |
//! | POST | /empleados/update/{id} | 更新员工 (全量覆盖) |
//! | POST | /empleados/delete/{id} | 删除员工 |

mod form;
mod handler;
mod views;

pub use form::EmployeeForm;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/empleados", get(handler::list).post(handler::create))
        .route("/empleados/edit/{id}", get(handler::edit))
        .route("/empleados/update/{id}", post(handler::update))
        .route("/empleados/delete/{id}", post(handler::delete))
}
