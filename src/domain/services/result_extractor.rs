// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::page_source::RawResultBlock;

/// 结果容器选择器，页面加载完成的判断依据
pub const RESULT_BLOCK_SELECTOR: &str = ".result__body";
const TITLE_SELECTOR: &str = ".result__title";
const URL_SELECTOR: &str = ".result__url";
const SNIPPET_SELECTOR: &str = ".result__snippet";

/// 结果提取器
///
/// 从单个结果块中读取标题、链接和摘要。任一元素或 href 缺失时整个块被丢弃，
/// 返回 `None`，由调用方跳过后继续处理下一个块。
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultExtractor {
    unwrap_redirects: bool,
}

impl ResultExtractor {
    pub fn new(unwrap_redirects: bool) -> Self {
        Self { unwrap_redirects }
    }

    /// Extracts one result from `block`, found on the page at `page_url`.
    ///
    /// The href is resolved against `page_url` the way a browser resolves it, so
    /// relative and protocol-relative links are kept. With redirect unwrapping on,
    /// `/l/?uddg=<target>` links are replaced by their target.
    pub fn extract(&self, block: &RawResultBlock, page_url: &str) -> Option<SearchResult> {
        let title = block.text(TITLE_SELECTOR)?;
        let href = block.attr(URL_SELECTOR, "href")?;
        let url = resolve_href(&href, page_url)?;
        let description = block.text(SNIPPET_SELECTOR)?;

        let url = if self.unwrap_redirects {
            unwrap_redirect(&url).unwrap_or(url)
        } else {
            url
        };

        Some(SearchResult::new(title, url, Some(description)))
    }
}

fn resolve_href(href: &str, page_url: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match Url::parse(page_url) {
        Ok(base) => base.join(href).ok().map(String::from),
        Err(_) => Url::parse(href).ok().map(String::from),
    }
}

/// Target of a `/l/?uddg=<target>` redirect link, if `url` is one.
fn unwrap_redirect(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if !parsed.path().starts_with("/l/") {
        return None;
    }
    let (_, target) = parsed.query_pairs().find(|(key, _)| key == "uddg")?;
    Url::parse(&target).ok()?;
    Some(target.into_owned())
}
