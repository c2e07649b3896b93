// compliance-docgen/src/assembly.rs
//
// Top-level document assembly: pick the shell for the requested quality
// tier, merge generated content into it, apply the shared stylesheet and
// numbering, and pack the tree into DOCX bytes.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, Footer, Header, Level, LevelJc, LevelText,
    NumberFormat, Numbering, PageMargin, Paragraph, Run, RunFonts, SpecialIndentType, Start,
    Style, StyleType,
};
use tracing::info;

use crate::builders::{
    format_date, page_break, para, spacer, Block, ParaStyle, BULLET_NUMBERING, DECIMAL_NUMBERING,
};
use crate::enterprise::{
    create_certification_badge, create_cover_page, create_document_control_section,
    create_enterprise_footer, create_enterprise_header, create_signature_block,
    create_table_of_contents_section, tier_features, EnterpriseDocumentOptions,
};
use crate::error::{DocumentError, Result};
use crate::generators::{generate_content, generate_from_ai_sections};
use crate::models::{
    AiSection, AiSystemInfo, DocumentData, DocumentFormat, DocumentMetadata,
    GenerateDocumentOptions,
};
use crate::style::{colors, page, sizes, BODY_FONT};

/// Generate a document for one of the four implemented types.
pub async fn generate_document(
    data: &DocumentData,
    options: &GenerateDocumentOptions,
) -> Result<Vec<u8>> {
    ensure_docx(options)?;
    let opts = EnterpriseDocumentOptions::from_request(data, options);
    let content = generate_content(data, &opts.organization);
    info!(
        document_type = data.kind.type_key(),
        quality = ?options.quality,
        blocks = content.len(),
        "Assembling document"
    );
    assemble(content, &opts)
}

/// Generate a document directly from AI-authored sections, without a
/// per-type template.
pub async fn generate_universal_document(
    sections: &[AiSection],
    metadata: &DocumentMetadata,
    system: Option<&AiSystemInfo>,
    options: &GenerateDocumentOptions,
) -> Result<Vec<u8>> {
    ensure_docx(options)?;
    let opts = EnterpriseDocumentOptions::from_parts("universal", metadata, system, options);
    let content = generate_from_ai_sections(sections, &opts.organization, metadata.date);
    info!(
        document_type = "universal",
        quality = ?options.quality,
        sections = sections.len(),
        "Assembling document"
    );
    assemble(content, &opts)
}

/// Filesystem-safe artifact name: every non-alphanumeric character in the
/// title becomes an underscore, one for one.
pub fn artifact_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.docx", stem)
}

fn ensure_docx(options: &GenerateDocumentOptions) -> Result<()> {
    match options.format {
        DocumentFormat::Docx => Ok(()),
        DocumentFormat::Pdf => Err(DocumentError::UnsupportedFormat(
            "pdf output is not implemented".to_string(),
        )),
    }
}

/// Merge body content into the shell blocks selected by the quality tier.
pub fn compose(content: Vec<Block>, opts: &EnterpriseDocumentOptions) -> Vec<Block> {
    let features = tier_features(opts.quality);
    let mut blocks: Vec<Block> = Vec::new();

    if features.cover_page {
        blocks.extend(create_cover_page(opts));
    } else {
        blocks.extend(basic_title_page(opts));
    }
    if features.document_control {
        blocks.extend(create_document_control_section(opts));
    }
    if features.table_of_contents {
        blocks.extend(create_table_of_contents_section());
    }
    blocks.extend(content);
    if features.signature_block {
        blocks.extend(create_signature_block(opts));
    }
    if features.certification_badge {
        // No-op when no certification number was supplied.
        blocks.extend(create_certification_badge(opts));
    }
    blocks
}

/// Compose the full block sequence for the tier, then pack it.
fn assemble(content: Vec<Block>, opts: &EnterpriseDocumentOptions) -> Result<Vec<u8>> {
    let features = tier_features(opts.quality);
    let blocks = compose(content, opts);

    let mut docx = Docx::new()
        .page_size(page::WIDTH, page::HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(page::MARGIN)
                .bottom(page::MARGIN)
                .left(page::MARGIN)
                .right(page::MARGIN),
        );
    docx = apply_styles(docx, opts.heading_color());
    docx = apply_numbering(docx);

    if features.enhanced_chrome {
        docx = docx
            .header(create_enterprise_header(opts))
            .footer(create_enterprise_footer(opts));
    } else {
        docx = docx.header(basic_header(opts)).footer(basic_footer(opts));
    }

    for block in blocks {
        docx = match block {
            Block::Paragraph(p) => docx.add_paragraph(p),
            Block::Table(t) => docx.add_table(t),
            Block::Toc(t) => {
                // Enterprise documents recompute the field when opened.
                let t = if features.auto_update_fields { t.auto() } else { t };
                docx.add_table_of_contents(t)
            }
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| DocumentError::PackingError(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Shared stylesheet: body font/size defaults plus the three heading
/// styles, tinted with the brand color.
fn apply_styles(docx: Docx, heading_color: &str) -> Docx {
    docx.default_fonts(RunFonts::new().ascii(BODY_FONT))
        .default_size(sizes::BODY)
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(sizes::HEADING_1)
                .color(heading_color)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(sizes::HEADING_2)
                .color(heading_color)
                .bold(),
        )
        .add_style(
            Style::new("Heading3", StyleType::Paragraph)
                .name("Heading 3")
                .size(sizes::HEADING_3)
                .color(colors::GRAY_DARK)
                .bold(),
        )
}

/// The two shared numbering definitions: bullet glyph and decimal-dot.
fn apply_numbering(docx: Docx) -> Docx {
    docx.add_abstract_numbering(
        AbstractNumbering::new(BULLET_NUMBERING).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("\u{2022}"),
                LevelJc::new("left"),
            )
            .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_abstract_numbering(
        AbstractNumbering::new(DECIMAL_NUMBERING).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("decimal"),
                LevelText::new("%1."),
                LevelJc::new("left"),
            )
            .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
    .add_numbering(Numbering::new(DECIMAL_NUMBERING, DECIMAL_NUMBERING))
}

/// Plain title page used by the basic tier.
fn basic_title_page(opts: &EnterpriseDocumentOptions) -> Vec<Block> {
    let centered = |text: &str, style: ParaStyle| -> Block {
        para(
            text,
            &ParaStyle {
                align: Some(AlignmentType::Center),
                ..style
            },
        )
        .into()
    };

    let mut blocks = vec![
        spacer(2400).into(),
        centered(
            &opts.title,
            ParaStyle {
                bold: true,
                color: Some(colors::PRIMARY.to_string()),
                size: Some(sizes::TITLE),
                ..Default::default()
            },
        ),
    ];
    if let Some(subtitle) = &opts.subtitle {
        blocks.push(centered(
            subtitle,
            ParaStyle {
                color: Some(colors::GRAY.to_string()),
                size: Some(sizes::SUBTITLE),
                ..Default::default()
            },
        ));
    }
    blocks.push(spacer(400).into());
    blocks.push(centered(
        &format_date(Some(opts.date)),
        ParaStyle {
            color: Some(colors::GRAY_DARK.to_string()),
            ..Default::default()
        },
    ));
    blocks.push(centered(
        &format!("Prepared by {}", opts.prepared_by),
        ParaStyle {
            color: Some(colors::GRAY.to_string()),
            size: Some(sizes::SMALL),
            ..Default::default()
        },
    ));
    blocks.push(centered(
        &format!("Generated by the {} compliance platform", opts.organization),
        ParaStyle {
            italics: true,
            color: Some(colors::GRAY_LIGHT.to_string()),
            size: Some(sizes::TINY),
            ..Default::default()
        },
    ));
    blocks.push(page_break().into());
    blocks
}

/// Basic shell header: title on the left zone, confidential marker or
/// company name flush right.
fn basic_header(opts: &EnterpriseDocumentOptions) -> Header {
    let marker = if opts.confidential {
        "CONFIDENTIAL".to_string()
    } else {
        opts.organization.clone()
    };
    Header::new().add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Right)
            .add_run(
                Run::new()
                    .add_text(format!("{} | {}", opts.title, marker))
                    .size(sizes::TINY)
                    .color(colors::GRAY),
            ),
    )
}

/// Basic shell footer: centered company plus live page numbers.
fn basic_footer(opts: &EnterpriseDocumentOptions) -> Footer {
    let mut p = Paragraph::new().align(AlignmentType::Center).add_run(
        Run::new()
            .add_text(format!("{} | Page ", opts.organization))
            .size(sizes::TINY)
            .color(colors::GRAY),
    );
    for run in crate::enterprise::field_runs("PAGE", sizes::TINY, colors::GRAY) {
        p = p.add_run(run);
    }
    p = p.add_run(
        Run::new()
            .add_text(" of ")
            .size(sizes::TINY)
            .color(colors::GRAY),
    );
    for run in crate::enterprise::field_runs("NUMPAGES", sizes::TINY, colors::GRAY) {
        p = p.add_run(run);
    }
    Footer::new().add_paragraph(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_replaces_every_non_alphanumeric() {
        assert_eq!(
            artifact_filename("Risk Assessment: Chatbot v2!"),
            "Risk_Assessment__Chatbot_v2_.docx"
        );
    }

    #[test]
    fn pdf_is_rejected() {
        let options = GenerateDocumentOptions {
            format: DocumentFormat::Pdf,
            ..Default::default()
        };
        assert!(matches!(
            ensure_docx(&options),
            Err(DocumentError::UnsupportedFormat(_))
        ));
    }
}
