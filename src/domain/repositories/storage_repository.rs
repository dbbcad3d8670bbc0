// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 产物已存在，存储只追加不覆盖
    #[error("Artifact already exists: {0}")]
    AlreadyExists(String),
    /// 非法键
    #[error("Invalid artifact key: {0}")]
    InvalidKey(String),
}

/// 导出产物存储特质
///
/// 只追加：新键写入一次，已存在的键不会被覆盖或删除。
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 保存新产物，键已存在时返回 `AlreadyExists`
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// 根据键读取产物
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// 列出以 `suffix` 结尾的产物键，按名称排序
    async fn list(&self, suffix: &str) -> Result<Vec<String>, StorageError>;

    /// 产物对调用方可见的位置（本地存储为文件路径）
    fn location(&self, key: &str) -> String;
}
