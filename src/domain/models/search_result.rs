// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单条搜索结果
///
/// 由结果提取器从结果块中构造，进入结果集合后不再修改。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

impl SearchResult {
    pub fn new(title: String, url: String, description: Option<String>) -> Self {
        Self {
            title,
            url,
            description,
        }
    }
}
