// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serprs::domain::search::page_source::{
    PageSession, RawResultBlock, SearchError, SessionProvider,
};
use serprs::domain::services::crawl_service::{CrawlOptions, CrawlService};
use serprs::domain::services::export_service::ExportService;
use serprs::domain::services::search_pipeline::SearchPipeline;
use serprs::domain::services::validity_filter::ValidityFilter;
use serprs::infrastructure::document::pdf_renderer::PdfRenderer;
use serprs::infrastructure::storage::LocalStorage;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// DuckDuckGo-style result markup for one block.
pub fn result_html(title: &str, url: &str, snippet: &str) -> String {
    format!(
        r#"<div class="result results_links web-result">
             <div class="links_main result__body">
               <h2 class="result__title"><a rel="nofollow" class="result__a" href="{url}">{title}</a></h2>
               <div class="result__extras"><a class="result__url" href="{url}">{url}</a></div>
               <a class="result__snippet" href="{url}">{snippet}</a>
             </div>
           </div>"#
    )
}

/// A full result page: `valid` results on `.org`, then `invalid` on `.xyz`.
pub fn results_page(page: usize, valid: usize, invalid: usize) -> String {
    let mut body = String::from("<html><body><div id=\"links\" class=\"results\">");
    for i in 0..valid {
        body.push_str(&result_html(
            &format!("Result {}-{}", page, i),
            &format!("https://example-{}-{}.org/", page, i),
            "An example snippet",
        ));
    }
    for i in 0..invalid {
        body.push_str(&result_html(
            &format!("Spam {}-{}", page, i),
            &format!("https://spam-{}-{}.xyz/", page, i),
            "Buy now",
        ));
    }
    body.push_str("</div></body></html>");
    body
}

/// Serves the same canned blocks for every page and counts fetches.
pub struct StaticProvider {
    blocks: Vec<RawResultBlock>,
    available: bool,
    pub fetches: Arc<AtomicUsize>,
}

impl StaticProvider {
    pub fn new(page_html: &str) -> Self {
        Self {
            blocks: RawResultBlock::from_page(page_html, ".result__body"),
            available: true,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            blocks: Vec::new(),
            available: false,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

struct StaticSession {
    blocks: Vec<RawResultBlock>,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl SessionProvider for StaticProvider {
    async fn acquire(&self) -> Result<Box<dyn PageSession>, SearchError> {
        if !self.available {
            return Err(SearchError::SessionUnavailable(
                "chrome not installed".to_string(),
            ));
        }
        Ok(Box::new(StaticSession {
            blocks: self.blocks.clone(),
            fetches: self.fetches.clone(),
        }))
    }
}

#[async_trait]
impl PageSession for StaticSession {
    async fn fetch_blocks(
        &self,
        _url: &str,
        _selector: &str,
        _wait: Duration,
    ) -> Result<Vec<RawResultBlock>, SearchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.blocks.clone())
    }

    async fn close(&mut self) -> Result<(), SearchError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

pub fn fast_options(base_url: &str) -> CrawlOptions {
    CrawlOptions {
        base_url: base_url.to_string(),
        page_delay: Duration::ZERO,
        wait_timeout: Duration::from_secs(2),
        ..CrawlOptions::default()
    }
}

/// Pipeline writing real PDFs into `output_dir`.
pub fn pipeline_with(
    provider: Arc<dyn SessionProvider>,
    output_dir: &std::path::Path,
) -> Arc<SearchPipeline> {
    let crawler = CrawlService::new(
        provider,
        ValidityFilter::default(),
        fast_options("https://duckduckgo.com/html/"),
    );
    let exporter = ExportService::new(
        Arc::new(LocalStorage::new(output_dir)),
        Arc::new(PdfRenderer),
    );
    Arc::new(SearchPipeline::new(crawler, exporter))
}
