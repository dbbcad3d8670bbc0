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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::services::validity_filter::DomainMatchMode;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 搜索爬取配置
    pub search: SearchSettings,
    /// 导出配置
    pub export: ExportSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 页面来源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// 无头浏览器（chromiumoxide）
    Browser,
    /// 纯 HTTP（reqwest）
    Http,
}

/// 搜索爬取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 页面来源
    pub engine: EngineKind,
    /// 结果页基础地址
    pub base_url: String,
    /// 最多抓取页数
    pub max_pages: u32,
    /// 每页结果偏移量
    pub results_per_page_offset: u32,
    /// 结果上限（不超过 50）
    pub result_cap: usize,
    /// 等待结果容器的超时（毫秒）
    pub wait_timeout_ms: u64,
    /// 翻页间隔（毫秒）
    pub page_delay_ms: u64,
    /// 域名匹配方式
    pub domain_match: DomainMatchMode,
    /// 是否按 URL 去重
    pub dedupe_urls: bool,
    /// 是否还原 `/l/?uddg=` 跳转链接
    pub unwrap_redirects: bool,
    /// 远程 Chrome 调试地址，设置后不再本地启动浏览器
    pub chromium_remote_url: Option<String>,
    /// HTTP 来源使用的 User-Agent
    pub user_agent: String,
}

/// 导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// 文档输出目录
    pub output_dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 默认值 → `config/default` → `config/{APP_ENVIRONMENT}` → `SERPRS__*` 环境变量
    pub fn new() -> Result<Self, ConfigError> {
        let env = environment_name(std::env::var("APP_ENVIRONMENT").ok());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SERPRS").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub(crate) fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("search.engine", "browser")?
            .set_default("search.base_url", "https://duckduckgo.com/html/")?
            .set_default("search.max_pages", 10)?
            .set_default("search.results_per_page_offset", 30)?
            .set_default("search.result_cap", 50)?
            .set_default("search.wait_timeout_ms", 5000)?
            .set_default("search.page_delay_ms", 500)?
            .set_default("search.domain_match", "substring")?
            .set_default("search.dedupe_urls", false)?
            .set_default("search.unwrap_redirects", false)?
            .set_default(
                "search.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
            )?
            .set_default("export.output_dir", "/tmp")
    }
}

/// 运行环境名称，未设置时为 `development`
pub(crate) fn environment_name(value: Option<String>) -> String {
    value
        .filter(|env| !env.trim().is_empty())
        .unwrap_or_else(|| "development".to_string())
}
