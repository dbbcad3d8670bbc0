// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;

/// 一次调用的最终产物
#[derive(Debug, Clone, PartialEq)]
pub enum ExportArtifact {
    /// 结构化结果集，原样返回
    Structured {
        query: String,
        results: Vec<SearchResult>,
        total_results: usize,
    },
    /// 已持久化的分页文档
    Document {
        file_name: String,
        location: String,
        page_count: usize,
    },
}
