// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// HTTP 层使用的请求与响应数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 搜索结果模型、页面来源接口、爬取/聚合/导出流水线
pub mod domain;

/// 引擎模块
///
/// 页面来源实现：无头浏览器与纯 HTTP
pub mod engines;

/// 基础设施模块
///
/// 导出产物存储与 PDF 渲染
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
