// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::domain::search::page_source::{
    PageSession, RawResultBlock, SearchError, SessionProvider,
};

const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 浏览器会话提供者
///
/// 基于chromiumoxide实现，每次爬取启动（或连接）一个独立的浏览器会话
pub struct BrowserSessionProvider {
    remote_url: Option<String>,
    request_timeout: Duration,
}

impl BrowserSessionProvider {
    pub fn new(remote_url: Option<String>, request_timeout: Duration) -> Self {
        Self {
            remote_url,
            request_timeout,
        }
    }
}

#[async_trait]
impl SessionProvider for BrowserSessionProvider {
    async fn acquire(&self) -> Result<Box<dyn PageSession>, SearchError> {
        let (browser, mut handler) = if let Some(ref url) = self.remote_url {
            tracing::info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url).await.map_err(|e| {
                SearchError::SessionUnavailable(format!("Failed to connect to remote Chrome: {}", e))
            })?
        } else {
            let config = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(self.request_timeout)
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage")
                .build()
                .map_err(SearchError::SessionUnavailable)?;

            Browser::launch(config)
                .await
                .map_err(|e| SearchError::SessionUnavailable(e.to_string()))?
        };

        // Spawn a handler to process browser events
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let mut session = BrowserSession {
            browser,
            page: None,
            handler: HandlerGuard(handler_task),
            owns_browser: self.remote_url.is_none(),
        };

        match session.browser.new_page("about:blank").await {
            Ok(page) => {
                session.page = Some(page);
                Ok(Box::new(session))
            }
            Err(e) => {
                let _ = session.close().await;
                Err(SearchError::SessionUnavailable(e.to_string()))
            }
        }
    }
}

/// Aborts the browser event loop when dropped, so a session abandoned
/// mid-crawl does not leave the task running.
struct HandlerGuard(JoinHandle<()>);

impl Drop for HandlerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// 单次爬取独占的浏览器标签页
struct BrowserSession {
    browser: Browser,
    page: Option<Page>,
    handler: HandlerGuard,
    owns_browser: bool,
}

impl BrowserSession {
    async fn wait_for_selector(page: &Page, selector: &str, wait: Duration) -> Result<(), SearchError> {
        tokio::time::timeout(wait, async {
            while page.find_element(selector).await.is_err() {
                tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
            }
        })
        .await
        .map_err(|_| SearchError::Timeout)
    }
}

#[async_trait]
impl PageSession for BrowserSession {
    async fn fetch_blocks(
        &self,
        url: &str,
        selector: &str,
        wait: Duration,
    ) -> Result<Vec<RawResultBlock>, SearchError> {
        let page = self
            .page
            .as_ref()
            .ok_or_else(|| SearchError::SessionUnavailable("session already closed".to_string()))?;

        page.goto(url)
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        Self::wait_for_selector(page, selector, wait).await?;

        let content = page
            .content()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        Ok(RawResultBlock::from_page(&content, selector))
    }

    async fn close(&mut self) -> Result<(), SearchError> {
        let mut outcome = Ok(());

        if let Some(page) = self.page.take() {
            if let Err(e) = page.close().await {
                outcome = Err(SearchError::NetworkError(e.to_string()));
            }
        }

        // A remote browser is shared with other clients; only a launched one is shut down.
        if self.owns_browser {
            if let Err(e) = self.browser.close().await {
                outcome = Err(SearchError::NetworkError(e.to_string()));
            }
            let _ = self.browser.wait().await;
        }

        self.handler.0.abort();
        outcome
    }

    fn name(&self) -> &'static str {
        "browser"
    }
}
