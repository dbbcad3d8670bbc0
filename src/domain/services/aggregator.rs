// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_query::RESULT_CAP;
use crate::domain::models::search_result::SearchResult;

/// 截断结果集
///
/// 保留前 `min(max_results, RESULT_CAP, len)` 条，顺序不变，不排序、不去重、不重新过滤。
pub fn aggregate(mut results: Vec<SearchResult>, max_results: usize) -> Vec<SearchResult> {
    results.truncate(max_results.min(RESULT_CAP));
    results
}
