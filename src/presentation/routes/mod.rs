// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::search_pipeline::SearchPipeline;
use crate::presentation::handlers::{export_handler, search_handler};
use axum::{routing::get, Extension, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，处理器需要的 `Arc<SearchPipeline>` 由 [`app`] 注入
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/webscrape", get(search_handler::webscrape))
        .route("/list_pdfs", get(export_handler::list_pdfs))
}

/// 完整的应用：路由 + 流水线注入 + CORS + 请求追踪
pub fn app(pipeline: Arc<SearchPipeline>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes()
        .layer(Extension(pipeline))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 服务信息端点
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Web Scraper API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/webscrape": "GET endpoint for web scraping (use with ?query parameter)",
            "/list_pdfs": "Lists all stored PDFs",
            "/health": "Liveness probe",
        }
    }))
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
