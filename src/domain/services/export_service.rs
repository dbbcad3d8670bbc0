// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Local};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::domain::export::layout::layout_document;
use crate::domain::export::renderer::{DocumentRenderer, RenderError};
use crate::domain::models::export_artifact::ExportArtifact;
use crate::domain::models::search_query::OutputMode;
use crate::domain::models::search_result::SearchResult;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// `search_results_<query>_<YYYYMMDD_HHMMSS>.<extension>`, with spaces and any
/// character unsafe in a file name replaced by `_`.
pub fn document_file_name(query: &str, created_at: &DateTime<Local>, extension: &str) -> String {
    let safe_query: String = query
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "search_results_{}_{}.{}",
        safe_query,
        created_at.format("%Y%m%d_%H%M%S"),
        extension
    )
}

/// 导出服务
///
/// 结构化模式原样返回结果集；文档模式排版、渲染并写入产物存储。
pub struct ExportService {
    storage: Arc<dyn StorageRepository>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl ExportService {
    pub fn new(storage: Arc<dyn StorageRepository>, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { storage, renderer }
    }

    pub async fn export(
        &self,
        query: &str,
        results: Vec<SearchResult>,
        mode: OutputMode,
    ) -> Result<ExportArtifact, ExportError> {
        match mode {
            OutputMode::Structured => Ok(ExportArtifact::Structured {
                query: query.to_string(),
                total_results: results.len(),
                results,
            }),
            OutputMode::Document => self.export_document(query, &results, Local::now()).await,
        }
    }

    pub async fn export_document(
        &self,
        query: &str,
        results: &[SearchResult],
        created_at: DateTime<Local>,
    ) -> Result<ExportArtifact, ExportError> {
        let document = layout_document(query, results);
        let bytes = self.renderer.render(&document)?;

        let file_name = document_file_name(query, &created_at, self.renderer.extension());
        self.storage.save(&file_name, &bytes).await?;

        let location = self.storage.location(&file_name);
        info!(
            "Exported {} results to {} ({} pages)",
            results.len(),
            location,
            document.page_count()
        );

        Ok(ExportArtifact::Document {
            file_name,
            location,
            page_count: document.page_count(),
        })
    }

    /// Names of previously exported documents, read straight from storage.
    pub async fn list_documents(&self) -> Result<Vec<String>, StorageError> {
        self.storage
            .list(&format!(".{}", self.renderer.extension()))
            .await
    }
}
