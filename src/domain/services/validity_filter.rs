// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use url::Url;

pub const ALLOWED_DOMAIN_SUFFIXES: [&str; 6] = [".com", ".org", ".net", ".edu", ".gov", ".io"];

/// 域名匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DomainMatchMode {
    /// The lower-cased URL contains an allowed suffix anywhere, so
    /// `https://rust.community/x` passes on `.com`.
    #[default]
    Substring,
    /// The URL's host ends with an allowed suffix.
    Suffix,
}

/// 结果有效性过滤器
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidityFilter {
    mode: DomainMatchMode,
}

impl ValidityFilter {
    pub fn new(mode: DomainMatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DomainMatchMode {
        self.mode
    }

    pub fn is_valid(&self, url: &str) -> bool {
        if url.trim().is_empty() {
            return false;
        }

        match self.mode {
            DomainMatchMode::Substring => {
                let lowered = url.to_lowercase();
                ALLOWED_DOMAIN_SUFFIXES
                    .iter()
                    .any(|suffix| lowered.contains(suffix))
            }
            DomainMatchMode::Suffix => Url::parse(url)
                .ok()
                .and_then(|parsed| parsed.host_str().map(str::to_lowercase))
                .is_some_and(|host| {
                    ALLOWED_DOMAIN_SUFFIXES
                        .iter()
                        .any(|suffix| host.ends_with(suffix))
                }),
        }
    }
}
