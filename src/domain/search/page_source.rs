// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Page session unavailable: {0}")]
    SessionUnavailable(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Timeout")]
    Timeout,
}

/// 结果页上的一个结果块
///
/// 以元素的 HTML 片段表示，只能通过选择器读取文本或属性。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResultBlock {
    html: String,
}

impl RawResultBlock {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Splits a full result page into one block per element matching `selector`,
    /// in document order.
    pub fn from_page(page_html: &str, selector: &str) -> Vec<Self> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let document = Html::parse_document(page_html);
        document
            .select(&selector)
            .map(|element| Self::new(element.html()))
            .collect()
    }

    /// Trimmed text of the first element matching `selector`.
    pub fn text(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let fragment = Html::parse_fragment(&self.html);
        let element = fragment.select(&selector).next()?;
        Some(element.text().collect::<String>().trim().to_string())
    }

    /// Attribute `name` of the first element matching `selector`.
    pub fn attr(&self, selector: &str, name: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let fragment = Html::parse_fragment(&self.html);
        let element = fragment.select(&selector).next()?;
        element.value().attr(name).map(str::to_string)
    }
}

/// 一次爬取期间独占的页面会话（浏览器标签页或 HTTP 客户端）
#[async_trait]
pub trait PageSession: Send + Sync {
    /// Loads `url`, waits up to `wait` for `selector` to be present and returns
    /// every matching block in page order.
    async fn fetch_blocks(
        &self,
        url: &str,
        selector: &str,
        wait: Duration,
    ) -> Result<Vec<RawResultBlock>, SearchError>;

    /// Releases the underlying resource. Called exactly once per session.
    async fn close(&mut self) -> Result<(), SearchError>;

    fn name(&self) -> &'static str;
}

/// 页面会话的提供者，每次爬取调用获取一个新会话
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn PageSession>, SearchError>;
}
