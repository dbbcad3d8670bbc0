// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::domain::export::layout::{Document, FONT_SIZE, PAGE_HEIGHT, PAGE_WIDTH};
use crate::domain::export::renderer::{DocumentRenderer, RenderError};

/// PDF渲染器
///
/// 使用内置 Helvetica 字体，按排版结果逐行绘制，每个文档页对应一个 PDF 页
pub struct PdfRenderer;

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let width: Mm = Pt(PAGE_WIDTH).into();
        let height: Mm = Pt(PAGE_HEIGHT).into();

        let (pdf, first_page, first_layer) =
            PdfDocument::new(document.title.as_str(), width, height, "Layer 1");
        let font = pdf
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        for (index, page) in document.pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                pdf.add_page(width, height, format!("Layer {}", index + 1))
            };
            let layer = pdf.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                layer.use_text(
                    line.text.as_str(),
                    FONT_SIZE,
                    Pt(line.x).into(),
                    Pt(line.y).into(),
                    &font,
                );
            }
        }

        pdf.save_to_bytes()
            .map_err(|e| RenderError::Backend(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}
