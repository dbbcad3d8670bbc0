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

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::search::page_source::{
    PageSession, RawResultBlock, SearchError, SessionProvider,
};

/// HTTP会话提供者
///
/// 基于reqwest实现，适用于无需执行 JavaScript 的纯 HTML 结果页
pub struct HttpSessionProvider {
    user_agent: String,
    request_timeout: Duration,
}

impl HttpSessionProvider {
    pub fn new(user_agent: impl Into<String>, request_timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            request_timeout,
        }
    }
}

#[async_trait]
impl SessionProvider for HttpSessionProvider {
    async fn acquire(&self) -> Result<Box<dyn PageSession>, SearchError> {
        // Each crawl gets a fresh client for cookie isolation
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.request_timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| SearchError::SessionUnavailable(e.to_string()))?;

        Ok(Box::new(HttpSession { client }))
    }
}

struct HttpSession {
    client: reqwest::Client,
}

#[async_trait]
impl PageSession for HttpSession {
    /// The wait bounds the whole request; a page without any matching block is
    /// simply an empty page.
    async fn fetch_blocks(
        &self,
        url: &str,
        selector: &str,
        wait: Duration,
    ) -> Result<Vec<RawResultBlock>, SearchError> {
        let body = tokio::time::timeout(wait, async {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        })
        .await
        .map_err(|_| SearchError::Timeout)?
        .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        Ok(RawResultBlock::from_page(&body, selector))
    }

    async fn close(&mut self) -> Result<(), SearchError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
