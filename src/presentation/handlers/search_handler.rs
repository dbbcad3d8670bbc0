// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::{
    application::dto::search_request::{
        DocumentResponseDto, SearchResponseDto, SearchResultDto, WebScrapeParams,
    },
    domain::{
        models::{export_artifact::ExportArtifact, search_query::OutputMode},
        services::search_pipeline::{SearchPipeline, SearchServiceError},
    },
};

/// 处理搜索请求
///
/// 校验参数后运行搜索流水线，按 `output_format` 返回结构化结果或生成的 PDF 路径。
/// 参数错误返回 400，流水线失败返回 500。
pub async fn webscrape(
    Extension(pipeline): Extension<Arc<SearchPipeline>>,
    Query(params): Query<WebScrapeParams>,
) -> impl IntoResponse {
    if let Err(e) = params.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": validation_message(&e) })),
        )
            .into_response();
    }

    let mode = match OutputMode::from_format(params.output_format.as_deref().unwrap_or("json")) {
        Ok(mode) => mode,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
                .into_response()
        }
    };
    let max_results = params
        .max_results
        .unwrap_or(WebScrapeParams::DEFAULT_MAX_RESULTS);

    match pipeline.run_search(&params.query, max_results, mode).await {
        Ok(ExportArtifact::Structured {
            query,
            results,
            total_results,
        }) => (
            StatusCode::OK,
            Json(json!(SearchResponseDto {
                query,
                results: results.into_iter().map(SearchResultDto::from).collect(),
                total_results,
            })),
        )
            .into_response(),
        Ok(ExportArtifact::Document { location, .. }) => (
            StatusCode::OK,
            Json(json!(DocumentResponseDto {
                message: "PDF generated".to_string(),
                pdf_path: location,
            })),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| errors.to_string())
}

impl From<SearchServiceError> for (StatusCode, String) {
    fn from(err: SearchServiceError) -> Self {
        match err {
            SearchServiceError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            other => {
                error!("Search failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("An error occurred: {}", other),
                )
            }
        }
    }
}
