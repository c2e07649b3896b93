// compliance-docgen/src/builders.rs
//
// Primitive element builders. Each function is pure: same inputs, same
// element. Inputs are not validated; a malformed width or empty header
// list yields a malformed but non-crashing document.

use chrono::{DateTime, Utc};
use docx_rs::{
    AlignmentType, BreakType, IndentLevel, LineSpacing, NumberingId, Paragraph, ParagraphChild,
    Run, RunChild, Shading, ShdType, Table, TableCell, TableCellContent, TableChild,
    TableLayoutType, TableOfContents, TableRow, TableRowChild, WidthType,
};

use crate::style::{colors, columns, page, sizes, PARA_SPACING_AFTER};

/// Numbering definition id for bulleted lists (see `assembly::apply_numbering`).
pub const BULLET_NUMBERING: usize = 1;
/// Numbering definition id for decimal-dot lists.
pub const DECIMAL_NUMBERING: usize = 2;

/// A single body element. Document order is the vector order; the assembly
/// layer flattens these into the docx document children.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Toc(TableOfContents),
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(t)
    }
}

/// Optional styling for `para`.
#[derive(Debug, Clone, Default)]
pub struct ParaStyle {
    pub align: Option<AlignmentType>,
    pub bold: bool,
    pub italics: bool,
    pub color: Option<String>,
    pub size: Option<usize>,
    pub spacing_after: Option<u32>,
}

/// Generic body paragraph. Defaults: black, body size, 200 twips after.
pub fn para(text: &str, style: &ParaStyle) -> Paragraph {
    let mut run = Run::new()
        .add_text(text)
        .size(style.size.unwrap_or(sizes::BODY))
        .color(style.color.as_deref().unwrap_or(colors::BLACK));
    if style.bold {
        run = run.bold();
    }
    if style.italics {
        run = run.italic();
    }

    let mut p = Paragraph::new().add_run(run).line_spacing(
        LineSpacing::new().after(style.spacing_after.unwrap_or(PARA_SPACING_AFTER)),
    );
    if let Some(align) = style.align {
        p = p.align(align);
    }
    p
}

/// Body paragraph with default styling.
pub fn body(text: &str) -> Paragraph {
    para(text, &ParaStyle::default())
}

/// One differently-styled run inside a `rich_para`.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italics: bool,
    pub color: Option<String>,
    pub size: Option<usize>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italics: false,
            color: None,
            size: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}

/// Paragraph composed of multiple styled runs, e.g. a branded company name
/// embedded in gray body text.
pub fn rich_para(runs: &[TextRun], align: Option<AlignmentType>) -> Paragraph {
    let mut p = Paragraph::new().line_spacing(LineSpacing::new().after(PARA_SPACING_AFTER));
    for tr in runs {
        let mut run = Run::new()
            .add_text(tr.text.as_str())
            .size(tr.size.unwrap_or(sizes::BODY))
            .color(tr.color.as_deref().unwrap_or(colors::BLACK));
        if tr.bold {
            run = run.bold();
        }
        if tr.italics {
            run = run.italic();
        }
        p = p.add_run(run);
    }
    if let Some(align) = align {
        p = p.align(align);
    }
    p
}

/// Section heading bound to one of the three shared heading styles.
pub fn heading(text: &str, level: u8) -> Paragraph {
    let (style_id, before, after) = match level {
        1 => ("Heading1", 360, 160),
        2 => ("Heading2", 280, 120),
        _ => ("Heading3", 200, 100),
    };
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style_id)
        .line_spacing(LineSpacing::new().before(before).after(after))
}

/// Bulleted list item.
pub fn bullet(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text).size(sizes::BODY))
        .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
        .line_spacing(LineSpacing::new().after(80))
}

/// Decimal-numbered list item.
pub fn numbered_item(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text).size(sizes::BODY))
        .numbering(NumberingId::new(DECIMAL_NUMBERING), IndentLevel::new(0))
        .line_spacing(LineSpacing::new().after(80))
}

/// Empty paragraph used purely for vertical whitespace.
pub fn spacer(height: u32) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new())
        .line_spacing(LineSpacing::new().after(height))
}

/// Paragraph carrying a hard page break.
pub fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

/// Branded header cell: primary fill, white bold text.
pub fn header_cell(text: &str, width: usize) -> TableCell {
    TableCell::new()
        .add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text(text)
                    .bold()
                    .size(sizes::BODY)
                    .color(colors::WHITE),
            ),
        )
        .width(width, WidthType::Dxa)
        .shading(
            Shading::new()
                .shd_type(ShdType::Clear)
                .color("auto")
                .fill(colors::PRIMARY),
        )
}

/// Data cell; `shaded` selects the zebra fill for alternating rows.
pub fn cell(text: &str, width: usize, shaded: bool) -> TableCell {
    let mut c = TableCell::new()
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(text).size(sizes::BODY)),
        )
        .width(width, WidthType::Dxa);
    if shaded {
        c = c.shading(
            Shading::new()
                .shd_type(ShdType::Clear)
                .color("auto")
                .fill(colors::ZEBRA),
        );
    }
    c
}

/// Data cell whose text is split on newlines, one paragraph per line.
/// Empty lines are dropped.
pub fn multi_line_cell(text: &str, width: usize, shaded: bool) -> TableCell {
    let mut c = TableCell::new().width(width, WidthType::Dxa);
    let mut wrote = false;
    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        c = c.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(line).size(sizes::BODY)),
        );
        wrote = true;
    }
    if !wrote {
        // A cell must carry at least one paragraph to stay well-formed.
        c = c.add_paragraph(Paragraph::new());
    }
    if shaded {
        c = c.shading(
            Shading::new()
                .shd_type(ShdType::Clear)
                .color("auto")
                .fill(colors::ZEBRA),
        );
    }
    c
}

/// Two-column (30/70) table with a branded "Property"/"Value" header row
/// and zebra striping on data rows.
pub fn key_value_table(pairs: &[(&str, &str)]) -> Table {
    let mut rows = vec![TableRow::new(vec![
        header_cell("Property", columns::NARROW),
        header_cell("Value", columns::WIDE),
    ])];
    for (i, (key, value)) in pairs.iter().enumerate() {
        let shaded = i % 2 == 1;
        rows.push(TableRow::new(vec![
            cell(key, columns::NARROW, shaded),
            multi_line_cell(value, columns::WIDE, shaded),
        ]));
    }
    Table::new(rows)
        .set_grid(vec![columns::NARROW, columns::WIDE])
        .width(page::CONTENT_WIDTH, WidthType::Dxa)
        .layout(TableLayoutType::Fixed)
}

/// N-column table with equal column widths computed from the usable page
/// width. The first row is the branded header; data rows zebra-stripe.
pub fn data_table(headers: &[&str], rows: &[Vec<String>]) -> Table {
    let col_width = page::CONTENT_WIDTH / headers.len().max(1);
    let mut table_rows = vec![TableRow::new(
        headers.iter().map(|h| header_cell(h, col_width)).collect(),
    )];
    for (i, row) in rows.iter().enumerate() {
        let shaded = i % 2 == 1;
        table_rows.push(TableRow::new(
            row.iter().map(|v| cell(v, col_width, shaded)).collect(),
        ));
    }
    Table::new(table_rows)
        .set_grid(headers.iter().map(|_| col_width).collect())
        .width(page::CONTENT_WIDTH, WidthType::Dxa)
        .layout(TableLayoutType::Fixed)
}

/// Render a date as "Month D, YYYY"; defaults to the current date.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.unwrap_or_else(Utc::now)
        .format("%B %-d, %Y")
        .to_string()
}

/// Collect the visible text of a paragraph. Used by tests and log lines.
pub fn paragraph_text(p: &Paragraph) -> String {
    let mut out = String::new();
    for child in &p.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    out.push_str(&t.text);
                }
            }
        }
    }
    out
}

fn table_text(t: &Table, out: &mut String) {
    for row in &t.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => {
                        out.push_str(&paragraph_text(p));
                        out.push('\n');
                    }
                    TableCellContent::Table(inner) => table_text(inner, out),
                    _ => {}
                }
            }
        }
    }
}

/// Collect the visible text of a block.
pub fn block_text(block: &Block) -> String {
    match block {
        Block::Paragraph(p) => paragraph_text(p),
        Block::Table(t) => {
            let mut out = String::new();
            table_text(t, &mut out);
            out
        }
        Block::Toc(_) => String::new(),
    }
}

/// Collect the visible text of a block sequence, newline-joined.
pub fn blocks_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_text)
        .collect::<Vec<_>>()
        .join("\n")
}
