//! PDF report rendering.
//!
//! Rendering is split in two steps: [`layout`] places every line on a page
//! (pure, testable), [`render`] draws the placed lines with `printpdf`.
//! Positions are in millimetres measured from the top-left corner of an A4
//! page.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::{EngineError, ExpenseRecord, Ledger, ResultEngine};

pub const TITLE: &str = "Expense Report";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const TOP_MARGIN_MM: f32 = 20.0;
const LINE_PITCH_MM: f32 = 10.0;
// Last baseline that still fits above the bottom margin.
const LAST_LINE_MM: f32 = PAGE_HEIGHT_MM - 20.0;
const FONT_SIZE_PT: f32 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: usize,
    pub lines: Vec<PlacedLine>,
}

/// `N. Category - CUR Amount (Description) [Method]`
#[must_use]
pub fn record_line(position: usize, expense: &ExpenseRecord) -> String {
    format!(
        "{}. {} - {} {} ({}) [{}]",
        position,
        expense.category,
        expense.currency,
        expense.amount.to_plain_string(),
        expense.description,
        expense.payment_method
    )
}

/// Title first, then one line per record; continues on a new page once the
/// bottom margin is reached.
#[must_use]
pub fn layout(ledger: &Ledger) -> ReportLayout {
    let mut lines = vec![PlacedLine {
        page: 0,
        x_mm: LEFT_MARGIN_MM,
        y_mm: TOP_MARGIN_MM,
        text: TITLE.to_string(),
    }];

    let mut page = 0;
    let mut y = TOP_MARGIN_MM + LINE_PITCH_MM;
    for (idx, expense) in ledger.expenses().iter().enumerate() {
        if y > LAST_LINE_MM {
            page += 1;
            y = TOP_MARGIN_MM;
        }
        lines.push(PlacedLine {
            page,
            x_mm: LEFT_MARGIN_MM,
            y_mm: y,
            text: record_line(idx + 1, expense),
        });
        y += LINE_PITCH_MM;
    }

    ReportLayout {
        pages: page + 1,
        lines,
    }
}

/// Draws `layout` on A4 pages with the built-in Helvetica font.
pub fn render(layout: &ReportLayout) -> ResultEngine<Vec<u8>> {
    let pdf_error = |err: printpdf::Error| EngineError::Pdf(err.to_string());

    let (doc, first_page, first_layer) = PdfDocument::new(
        TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;

    let mut layers = vec![doc.get_page(first_page).get_layer(first_layer)];
    for _ in 1..layout.pages {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        layers.push(doc.get_page(page).get_layer(layer));
    }

    for line in &layout.lines {
        let layer = layers.get(line.page).ok_or_else(|| {
            EngineError::Pdf(format!("line placed on missing page {}", line.page))
        })?;
        // printpdf measures y from the bottom edge.
        layer.use_text(
            line.text.clone(),
            FONT_SIZE_PT,
            Mm(line.x_mm),
            Mm(PAGE_HEIGHT_MM - line.y_mm),
            &font,
        );
    }

    doc.save_to_bytes().map_err(pdf_error)
}
