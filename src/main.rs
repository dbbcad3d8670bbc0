// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serprs::config::settings::Settings;
use serprs::domain::services::crawl_service::{CrawlOptions, CrawlService};
use serprs::domain::services::export_service::ExportService;
use serprs::domain::services::search_pipeline::SearchPipeline;
use serprs::domain::services::validity_filter::ValidityFilter;
use serprs::engines::create_session_provider;
use serprs::infrastructure::document::pdf_renderer::PdfRenderer;
use serprs::infrastructure::storage::create_storage_repository;
use serprs::presentation::routes;
use serprs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting serprs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build the pipeline
    let provider = create_session_provider(&settings.search);
    let crawler = CrawlService::new(
        provider,
        ValidityFilter::new(settings.search.domain_match),
        CrawlOptions::from(&settings.search),
    );

    tokio::fs::create_dir_all(&settings.export.output_dir).await?;
    let storage = create_storage_repository(&settings.export);
    let exporter = ExportService::new(storage, Arc::new(PdfRenderer));
    info!("Exporting documents to {}", settings.export.output_dir);

    let pipeline = Arc::new(SearchPipeline::new(crawler, exporter));

    // 4. Start HTTP server
    let app = routes::app(pipeline);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
