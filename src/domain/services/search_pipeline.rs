// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use tracing::info;

use crate::domain::models::export_artifact::ExportArtifact;
use crate::domain::models::search_query::{OutputMode, QueryError, SearchQuery};
use crate::domain::repositories::storage_repository::StorageError;
use crate::domain::search::page_source::SearchError;
use crate::domain::services::aggregator::aggregate;
use crate::domain::services::crawl_service::CrawlService;
use crate::domain::services::export_service::{ExportError, ExportService};

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("{0}")]
    Validation(#[from] QueryError),
    #[error("Search engine error: {0}")]
    Search(#[from] SearchError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// 搜索流水线
///
/// 无状态：页面来源和存储都以注入的方式持有，可在多个请求间共享。
pub struct SearchPipeline {
    crawler: CrawlService,
    exporter: ExportService,
}

impl SearchPipeline {
    pub fn new(crawler: CrawlService, exporter: ExportService) -> Self {
        Self { crawler, exporter }
    }

    /// Validates the input, then runs crawl → aggregate → export.
    ///
    /// Input errors are returned before any page is fetched.
    pub async fn run_search(
        &self,
        topic: &str,
        max_results: u32,
        mode: OutputMode,
    ) -> Result<ExportArtifact, SearchServiceError> {
        let query = SearchQuery::new(topic, max_results, mode)?;
        info!(
            "Running search for '{}' (max_results={}, mode={:?})",
            query.topic(),
            query.max_results(),
            query.mode()
        );

        let collected = self.crawler.crawl(query.topic()).await?;
        let results = aggregate(collected, query.max_results());
        let artifact = self
            .exporter
            .export(query.topic(), results, query.mode())
            .await?;

        Ok(artifact)
    }

    pub async fn list_documents(&self) -> Result<Vec<String>, StorageError> {
        self.exporter.list_documents().await
    }
}
