// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::export::layout::Document;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Document rendering failed: {0}")]
    Backend(String),
}

/// 文档渲染器特质
///
/// 把排版好的文档转换为某种文件格式的字节
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError>;

    /// File extension without the leading dot, e.g. `pdf`.
    fn extension(&self) -> &'static str;
}
