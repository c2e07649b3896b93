// compliance-docgen/src/enterprise/badge.rs

use docx_rs::AlignmentType;

use crate::builders::{format_date, para, Block, ParaStyle};
use crate::style::{colors, sizes};

use super::cover::rule;
use super::EnterpriseDocumentOptions;

/// Compliance certification badge. Returns no blocks when no certification
/// number was supplied; the caller composes it unconditionally.
pub fn create_certification_badge(opts: &EnterpriseDocumentOptions) -> Vec<Block> {
    let Some(number) = &opts.certification_number else {
        return Vec::new();
    };

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

    vec![
        rule(colors::SUCCESS),
        centered(
            "\u{2713} EU AI ACT COMPLIANT",
            ParaStyle {
                bold: true,
                color: Some(colors::SUCCESS.to_string()),
                size: Some(sizes::HEADING_2),
                ..Default::default()
            },
        ),
        centered(
            &format!(
                "Verified on {} \u{2022} Certificate No. {}",
                format_date(opts.certification_date),
                number
            ),
            ParaStyle {
                color: Some(colors::GRAY_DARK.to_string()),
                size: Some(sizes::SMALL),
                ..Default::default()
            },
        ),
        centered(
            &format!("Issued through the {} compliance programme", opts.organization),
            ParaStyle {
                italics: true,
                color: Some(colors::GRAY.to_string()),
                size: Some(sizes::TINY),
                ..Default::default()
            },
        ),
        rule(colors::SUCCESS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::blocks_text;
    use crate::models::{Confidentiality, QualityTier};

    fn options(number: Option<&str>) -> EnterpriseDocumentOptions {
        EnterpriseDocumentOptions {
            quality: QualityTier::Enterprise,
            title: "Doc".to_string(),
            subtitle: None,
            document_type: "risk".to_string(),
            version: "1.0".to_string(),
            date: chrono::Utc::now(),
            organization: "Acme Corp".to_string(),
            prepared_by: "Jane Doe".to_string(),
            system_name: None,
            risk_level: None,
            confidentiality: Confidentiality::Internal,
            confidential: false,
            eu_ai_act_articles: None,
            certification_number: number.map(str::to_string),
            certification_date: None,
            brand_color: None,
        }
    }

    #[test]
    fn no_certificate_means_no_blocks() {
        assert!(create_certification_badge(&options(None)).is_empty());
    }

    #[test]
    fn badge_shows_certificate_number() {
        let text = blocks_text(&create_certification_badge(&options(Some("EUAIA-2025-0042"))));
        assert!(text.contains("EU AI ACT COMPLIANT"));
        assert!(text.contains("Certificate No. EUAIA-2025-0042"));
    }
}
