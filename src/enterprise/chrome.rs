// compliance-docgen/src/enterprise/chrome.rs
//
// Running header and footer for the standard and enterprise shells. Zones
// are laid out with tab stops rather than tables so the chrome stays a
// single paragraph per line.

use docx_rs::{
    FieldCharType, Footer, Header, InstrText, Paragraph, Run, Tab, TabValueType,
};

use crate::builders::format_date;
use crate::models::Confidentiality;
use crate::style::{colors, page, sizes};

use super::EnterpriseDocumentOptions;

fn right_tab() -> Tab {
    Tab::new().val(TabValueType::Right).pos(page::CONTENT_WIDTH)
}

fn center_tab() -> Tab {
    Tab::new().val(TabValueType::Center).pos(page::CONTENT_WIDTH / 2)
}

/// Runs forming a live field: begin, instruction, separator, a placeholder
/// result ("1") for viewers that never recompute fields, end.
pub(crate) fn field_runs(instruction: &str, size: usize, color: &str) -> Vec<Run> {
    vec![
        Run::new().add_field_char(FieldCharType::Begin, false),
        Run::new().add_instr_text(InstrText::Unsupported(instruction.to_string())),
        Run::new().add_field_char(FieldCharType::Separate, false),
        Run::new().add_text("1").size(size).color(color),
        Run::new().add_field_char(FieldCharType::End, false),
    ]
}

fn classification_color(confidentiality: Confidentiality) -> &'static str {
    match confidentiality {
        Confidentiality::Public => colors::SUCCESS,
        Confidentiality::Internal => colors::WARNING,
        Confidentiality::Confidential | Confidentiality::StrictlyConfidential => colors::DANGER,
    }
}

/// Two-line header: organization + classification badge, then document
/// title + version.
pub fn create_enterprise_header(opts: &EnterpriseDocumentOptions) -> Header {
    let brand = opts.heading_color().to_string();

    let line1 = Paragraph::new()
        .add_tab(right_tab())
        .add_run(
            Run::new()
                .add_text(opts.organization.as_str())
                .bold()
                .size(sizes::SMALL)
                .color(brand),
        )
        .add_run(Run::new().add_tab())
        .add_run(
            Run::new()
                .add_text(opts.confidentiality.label().to_uppercase())
                .bold()
                .size(sizes::TINY)
                .color(classification_color(opts.confidentiality)),
        );

    let line2 = Paragraph::new()
        .add_tab(right_tab())
        .add_run(
            Run::new()
                .add_text(opts.title.as_str())
                .size(sizes::TINY)
                .color(colors::GRAY),
        )
        .add_run(Run::new().add_tab())
        .add_run(
            Run::new()
                .add_text(format!("Version {}", opts.version))
                .size(sizes::TINY)
                .color(colors::GRAY),
        );

    Header::new().add_paragraph(line1).add_paragraph(line2)
}

/// Three-zone footer: company left, live "Page X of Y" center, generation
/// date right.
pub fn create_enterprise_footer(opts: &EnterpriseDocumentOptions) -> Footer {
    let mut p = Paragraph::new()
        .add_tab(center_tab())
        .add_tab(right_tab())
        .add_run(
            Run::new()
                .add_text(opts.organization.as_str())
                .size(sizes::TINY)
                .color(colors::GRAY),
        )
        .add_run(Run::new().add_tab())
        .add_run(
            Run::new()
                .add_text("Page ")
                .size(sizes::TINY)
                .color(colors::GRAY),
        );
    for run in field_runs("PAGE", sizes::TINY, colors::GRAY) {
        p = p.add_run(run);
    }
    p = p.add_run(
        Run::new()
            .add_text(" of ")
            .size(sizes::TINY)
            .color(colors::GRAY),
    );
    for run in field_runs("NUMPAGES", sizes::TINY, colors::GRAY) {
        p = p.add_run(run);
    }
    p = p
        .add_run(Run::new().add_tab())
        .add_run(
            Run::new()
                .add_text(format_date(Some(opts.date)))
                .size(sizes::TINY)
                .color(colors::GRAY),
        );

    Footer::new().add_paragraph(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QualityTier;

    fn options() -> EnterpriseDocumentOptions {
        EnterpriseDocumentOptions {
            quality: QualityTier::Enterprise,
            title: "Model Card".to_string(),
            subtitle: None,
            document_type: "model_card".to_string(),
            version: "1.0".to_string(),
            date: chrono::Utc::now(),
            organization: "Acme Corp".to_string(),
            prepared_by: "Jane Doe".to_string(),
            system_name: None,
            risk_level: None,
            confidentiality: Confidentiality::StrictlyConfidential,
            confidential: false,
            eu_ai_act_articles: None,
            certification_number: None,
            certification_date: None,
            brand_color: None,
        }
    }

    #[test]
    fn header_has_two_lines() {
        let header = create_enterprise_header(&options());
        assert_eq!(header.children.len(), 2);
    }

    #[test]
    fn footer_embeds_page_fields() {
        use docx_rs::{FooterChild, ParagraphChild, RunChild};
        let footer = create_enterprise_footer(&options());
        let FooterChild::Paragraph(p) = &footer.children[0] else {
            panic!("expected a paragraph footer");
        };
        let instructions: Vec<String> = p
            .children
            .iter()
            .filter_map(|c| match c {
                ParagraphChild::Run(run) => Some(run.children.iter().filter_map(|rc| match rc {
                    RunChild::InstrText(i) => Some(format!("{:?}", i)),
                    _ => None,
                })),
                _ => None,
            })
            .flatten()
            .collect();
        assert!(instructions.iter().any(|i| i.contains("PAGE")));
        assert!(instructions.iter().any(|i| i.contains("NUMPAGES")));
    }
}
