// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 结果提取（result_extractor）：从结果块中读取标题、链接和摘要
/// - 有效性过滤（validity_filter）：按域名后缀接受或拒绝结果
/// - 爬取服务（crawl_service）：逐页抓取并累积结果，达到上限提前结束
/// - 聚合（aggregator）：按请求数量截断结果集
/// - 导出服务（export_service）：结构化返回或排版为文档并持久化
/// - 搜索流水线（search_pipeline）：校验输入并串联以上步骤
pub mod aggregator;
pub mod crawl_service;
pub mod export_service;
pub mod result_extractor;
pub mod search_pipeline;
pub mod validity_filter;
