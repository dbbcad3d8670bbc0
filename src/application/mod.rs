// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象
///
/// HTTP 层的请求参数与响应体
pub mod dto;
