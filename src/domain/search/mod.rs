// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义页面来源接口（会话、结果块）和搜索错误
pub mod page_source;
