//! Employee API Module
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | GET | /api/empleados | 员工列表 |
//! | POST | /api/empleados | 创建员工 |
//! | GET | /api/empleados/{id} | 查询员工 |
//! | PUT | /api/empleados/{id} | 部分更新 (浅合并) |
//! | DELETE | /api/empleados/{id} | 删除员工 |

mod handler;
mod lookup;

pub use lookup::{FoundEmployee, load_employee};

use axum::{Router, middleware, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/empleados", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let collection_routes = Router::new().route("/", get(handler::list).post(handler::create));

    // 单条记录路由：先经过 load_employee 查询
    let item_routes = Router::new()
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), load_employee));

    collection_routes.merge(item_routes)
}
