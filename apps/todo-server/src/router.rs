use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{api, AppState};

pub(crate) mod paths {
    pub const GET: &str = "/get";
    pub const ADD: &str = "/add";
    pub const UPDATE_ID: &str = "/update/{id}";
    pub const DELETE_ID: &str = "/delete/{id}";
}

pub(crate) fn build_router() -> Router<AppState> {
    Router::new()
        .route(paths::GET, get(api::todos::todos_list))
        .route(paths::ADD, post(api::todos::todos_add))
        .route(paths::UPDATE_ID, put(api::todos::todos_complete))
        .route(paths::DELETE_ID, delete(api::todos::todos_delete))
}
