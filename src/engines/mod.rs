// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::settings::{EngineKind, SearchSettings};
use crate::domain::search::page_source::SessionProvider;

pub mod browser_engine;
pub mod http_engine;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 根据配置创建页面会话提供者
pub fn create_session_provider(settings: &SearchSettings) -> Arc<dyn SessionProvider> {
    info!("Using {:?} page source", settings.engine);
    match settings.engine {
        EngineKind::Browser => Arc::new(browser_engine::BrowserSessionProvider::new(
            settings.chromium_remote_url.clone(),
            REQUEST_TIMEOUT,
        )),
        EngineKind::Http => Arc::new(http_engine::HttpSessionProvider::new(
            settings.user_agent.clone(),
            REQUEST_TIMEOUT,
        )),
    }
}
