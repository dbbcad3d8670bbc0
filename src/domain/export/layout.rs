// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;

// US Letter, in points, origin at the bottom-left corner.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const LEFT_MARGIN: f32 = 100.0;
pub const TOP_MARGIN: f32 = 750.0;
pub const BOTTOM_MARGIN: f32 = 50.0;
pub const HEADER_GAP: f32 = 30.0;
pub const LINE_HEIGHT: f32 = 20.0;
pub const RECORD_GAP: f32 = 40.0;
pub const FONT_SIZE: f32 = 12.0;
pub const DESCRIPTION_PLACEHOLDER: &str = "N/A";

/// Vertical space one record consumes: title and URL lines plus the description
/// line and the blank gap after it.
pub const RECORD_HEIGHT: f32 = LINE_HEIGHT * 2.0 + RECORD_GAP;

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentPage {
    pub lines: Vec<TextLine>,
}

/// 排版完成、与输出格式无关的文档
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub pages: Vec<DocumentPage>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// 将结果集排版到固定尺寸的页面上
///
/// 首页顶部是一行查询标题；每条结果占三行（标题、URL、描述或占位符）再加一个空行间隔。
/// 游标低于底部边距时换页，游标回到顶部边距。
pub fn layout_document(query: &str, results: &[SearchResult]) -> Document {
    let mut pages = Vec::new();
    let mut page = DocumentPage::default();
    let mut y = TOP_MARGIN;

    page.lines.push(line(y, format!("Search Results for: {}", query)));
    y -= HEADER_GAP;

    for result in results {
        if y < BOTTOM_MARGIN {
            pages.push(std::mem::take(&mut page));
            y = TOP_MARGIN;
        }

        page.lines.push(line(y, format!("Title: {}", result.title)));
        y -= LINE_HEIGHT;
        page.lines.push(line(y, format!("URL: {}", result.url)));
        y -= LINE_HEIGHT;
        let description = result
            .description
            .as_deref()
            .unwrap_or(DESCRIPTION_PLACEHOLDER);
        page.lines.push(line(y, format!("Description: {}", description)));
        y -= RECORD_GAP;
    }
    pages.push(page);

    Document {
        title: format!("Search Results for: {}", query),
        pages,
    }
}

/// Number of records that fit on a page whose first record starts at `start_y`.
pub fn page_capacity(start_y: f32) -> usize {
    let mut y = start_y;
    let mut count = 0;
    while y >= BOTTOM_MARGIN {
        count += 1;
        y -= RECORD_HEIGHT;
    }
    count
}

fn line(y: f32, text: String) -> TextLine {
    TextLine {
        x: LEFT_MARGIN,
        y,
        text,
    }
}
