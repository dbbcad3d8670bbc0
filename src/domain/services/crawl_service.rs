// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::settings::SearchSettings;
use crate::domain::models::search_query::RESULT_CAP;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::page_source::{PageSession, SearchError, SessionProvider};
use crate::domain::services::result_extractor::{ResultExtractor, RESULT_BLOCK_SELECTOR};
use crate::domain::services::validity_filter::ValidityFilter;

/// 爬取参数
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// 结果页基础地址
    pub base_url: String,
    /// 最多抓取的页数
    pub max_pages: u32,
    /// 每页的结果偏移量
    pub page_offset: u32,
    /// 结果上限，达到后提前结束
    pub result_cap: usize,
    /// 等待结果容器出现的超时
    pub wait_timeout: Duration,
    /// 两次抓取之间的间隔
    pub page_delay: Duration,
    /// 按 URL 去重（先出现者保留）
    pub dedupe_urls: bool,
    /// 将 `/l/?uddg=` 跳转链接还原为目标地址
    pub unwrap_redirects: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            base_url: "https://duckduckgo.com/html/".to_string(),
            max_pages: 10,
            page_offset: 30,
            result_cap: RESULT_CAP,
            wait_timeout: Duration::from_secs(5),
            page_delay: Duration::from_millis(500),
            dedupe_urls: false,
            unwrap_redirects: false,
        }
    }
}

impl From<&SearchSettings> for CrawlOptions {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            max_pages: settings.max_pages,
            page_offset: settings.results_per_page_offset,
            result_cap: settings.result_cap.min(RESULT_CAP),
            wait_timeout: Duration::from_millis(settings.wait_timeout_ms),
            page_delay: Duration::from_millis(settings.page_delay_ms),
            dedupe_urls: settings.dedupe_urls,
            unwrap_redirects: settings.unwrap_redirects,
        }
    }
}

/// Builds the URL of result page `page` (0-based) for `topic`.
pub fn build_page_url(base_url: &str, topic: &str, page: u32, page_offset: u32) -> String {
    format!(
        "{}?q={}&s={}",
        base_url,
        urlencoding::encode(topic),
        page * page_offset
    )
}

/// 爬取服务
///
/// 逐页抓取结果页，提取并过滤结果，达到上限后提前结束。
/// 单页失败视为空页，不重试；只有会话获取失败会返回错误。
pub struct CrawlService {
    provider: Arc<dyn SessionProvider>,
    filter: ValidityFilter,
    options: CrawlOptions,
}

impl CrawlService {
    pub fn new(
        provider: Arc<dyn SessionProvider>,
        filter: ValidityFilter,
        options: CrawlOptions,
    ) -> Self {
        Self {
            provider,
            filter,
            options,
        }
    }

    pub fn options(&self) -> &CrawlOptions {
        &self.options
    }

    /// Crawls up to the configured number of pages for `topic`.
    pub async fn crawl(&self, topic: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.crawl_pages(topic, self.options.max_pages).await
    }

    pub async fn crawl_pages(
        &self,
        topic: &str,
        max_pages: u32,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut session = self.provider.acquire().await?;
        info!("Acquired {} session for topic: {}", session.name(), topic);

        let results = self.collect_pages(session.as_ref(), topic, max_pages).await;

        // The page loop has no error path, so this always runs once the session exists.
        if let Err(e) = session.close().await {
            warn!("Failed to close {} session: {}", session.name(), e);
        }

        info!("Crawl for '{}' finished with {} results", topic, results.len());
        Ok(results)
    }

    async fn collect_pages(
        &self,
        session: &dyn PageSession,
        topic: &str,
        max_pages: u32,
    ) -> Vec<SearchResult> {
        let cap = self.options.result_cap;
        let extractor = ResultExtractor::new(self.options.unwrap_redirects);
        let mut results: Vec<SearchResult> = Vec::new();
        let mut seen_urls = HashSet::new();

        for page in 0..max_pages {
            let url = build_page_url(&self.options.base_url, topic, page, self.options.page_offset);

            let blocks = match session
                .fetch_blocks(&url, RESULT_BLOCK_SELECTOR, self.options.wait_timeout)
                .await
            {
                Ok(blocks) => blocks,
                Err(e) => {
                    warn!("Page {} failed ({}), treating as empty", page, e);
                    Vec::new()
                }
            };

            let before = results.len();
            for block in &blocks {
                let Some(result) = extractor.extract(block, &url) else {
                    debug!("Skipping incomplete result block on page {}", page);
                    continue;
                };
                if !self.filter.is_valid(&result.url) {
                    continue;
                }
                if self.options.dedupe_urls && !seen_urls.insert(result.url.clone()) {
                    continue;
                }
                results.push(result);
            }

            info!(
                "Page {}: {} blocks, {} accepted, {} total",
                page,
                blocks.len(),
                results.len() - before,
                results.len()
            );

            if results.len() >= cap {
                break;
            }
            if page + 1 < max_pages && !self.options.page_delay.is_zero() {
                tokio::time::sleep(self.options.page_delay).await;
            }
        }

        results.truncate(cap);
        results
    }
}
