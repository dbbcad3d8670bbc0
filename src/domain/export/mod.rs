// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 文档导出模块
///
/// 分页排版算法与渲染器接口
pub mod layout;
pub mod renderer;
