// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling on results per invocation, regardless of what the caller asks for.
pub const RESULT_CAP: usize = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query parameter cannot be empty")]
    EmptyTopic,
    #[error("max_results must be between 1 and 50")]
    MaxResultsOutOfRange(u32),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// 输出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// 结构化结果集（JSON）
    #[default]
    Structured,
    /// 分页文档（PDF）
    Document,
}

impl OutputMode {
    /// Parses the wire-level `output_format` value (`json` or `pdf`, any case).
    pub fn from_format(format: &str) -> Result<Self, QueryError> {
        match format.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Structured),
            "pdf" => Ok(Self::Document),
            other => Err(QueryError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// 一次搜索调用的不可变参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    topic: String,
    max_results: usize,
    mode: OutputMode,
}

impl SearchQuery {
    pub fn new(topic: &str, max_results: u32, mode: OutputMode) -> Result<Self, QueryError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(QueryError::EmptyTopic);
        }
        if max_results == 0 || max_results as usize > RESULT_CAP {
            return Err(QueryError::MaxResultsOutOfRange(max_results));
        }

        Ok(Self {
            topic: topic.to_string(),
            max_results: max_results as usize,
            mode,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}
