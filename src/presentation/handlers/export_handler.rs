// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::services::search_pipeline::SearchPipeline;

/// 列出已导出的 PDF 文件
pub async fn list_pdfs(Extension(pipeline): Extension<Arc<SearchPipeline>>) -> impl IntoResponse {
    match pipeline.list_documents().await {
        Ok(files) if files.is_empty() => (
            StatusCode::OK,
            Json(json!({ "message": "No PDFs found." })),
        )
            .into_response(),
        Ok(files) => (StatusCode::OK, Json(json!({ "pdf_files": files }))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Error listing PDFs: {}", e) })),
        )
            .into_response(),
    }
}
