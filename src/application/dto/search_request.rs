// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::search_result::SearchResult;

/// `GET /webscrape` 查询参数
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct WebScrapeParams {
    #[validate(length(min = 1, message = "Query parameter cannot be empty"))]
    pub query: String,
    #[validate(range(min = 1, max = 50, message = "max_results must be between 1 and 50"))]
    pub max_results: Option<u32>,
    /// `json` (default) or `pdf`
    pub output_format: Option<String>,
}

impl WebScrapeParams {
    pub const DEFAULT_MAX_RESULTS: u32 = 50;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub results: Vec<SearchResultDto>,
    pub total_results: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

impl From<SearchResult> for SearchResultDto {
    fn from(result: SearchResult) -> Self {
        Self {
            title: result.title,
            url: result.url,
            description: result.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponseDto {
    pub message: String,
    pub pdf_path: String,
}
