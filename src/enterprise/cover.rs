// compliance-docgen/src/enterprise/cover.rs

use docx_rs::AlignmentType;

use crate::builders::{format_date, page_break, para, spacer, Block, ParaStyle};
use crate::models::QualityTier;
use crate::style::{colors, sizes};

use super::{create_certification_badge, risk_level_label, EnterpriseDocumentOptions};

/// Decorative horizontal rule used on the cover page and badge.
pub(super) fn rule(color: &str) -> Block {
    para(
        &"─".repeat(48),
        &ParaStyle {
            align: Some(AlignmentType::Center),
            color: Some(color.to_string()),
            size: Some(sizes::BODY),
            spacing_after: Some(120),
            ..Default::default()
        },
    )
    .into()
}

fn centered(text: &str, style: ParaStyle) -> Block {
    para(
        text,
        &ParaStyle {
            align: Some(AlignmentType::Center),
            ..style
        },
    )
    .into()
}

/// Center-aligned title page. Always terminates in a hard page break.
pub fn create_cover_page(opts: &EnterpriseDocumentOptions) -> Vec<Block> {
    let brand = opts.heading_color().to_string();
    let mut blocks: Vec<Block> = Vec::new();

    blocks.push(rule(&brand));
    blocks.push(spacer(400).into());
    blocks.push(centered(
        &opts.organization.to_uppercase(),
        ParaStyle {
            bold: true,
            color: Some(brand.clone()),
            size: Some(sizes::SUBTITLE),
            ..Default::default()
        },
    ));
    blocks.push(spacer(600).into());
    blocks.push(centered(
        &opts.title,
        ParaStyle {
            bold: true,
            color: Some(colors::DARK.to_string()),
            size: Some(sizes::TITLE),
            ..Default::default()
        },
    ));
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
    blocks.push(spacer(200).into());
    blocks.push(centered(
        "EU AI Act Compliance Documentation",
        ParaStyle {
            italics: true,
            color: Some(colors::SECONDARY.to_string()),
            size: Some(sizes::BODY),
            ..Default::default()
        },
    ));
    blocks.push(spacer(400).into());
    blocks.push(rule(&brand));
    blocks.push(spacer(300).into());

    // Metadata block.
    let meta_style = ParaStyle {
        color: Some(colors::GRAY_DARK.to_string()),
        size: Some(sizes::BODY),
        spacing_after: Some(100),
        ..Default::default()
    };
    if let Some(system) = &opts.system_name {
        blocks.push(centered(&format!("AI System: {}", system), meta_style.clone()));
    }
    if let Some(risk) = &opts.risk_level {
        blocks.push(centered(
            &format!("Risk Classification: {}", risk_level_label(risk)),
            meta_style.clone(),
        ));
    }
    blocks.push(centered(&format!("Version {}", opts.version), meta_style.clone()));
    blocks.push(centered(&format_date(Some(opts.date)), meta_style.clone()));
    blocks.push(centered(
        &format!("Classification: {}", opts.confidentiality.label()),
        meta_style.clone(),
    ));
    let articles = opts.articles();
    if !articles.is_empty() {
        blocks.push(centered(
            &format!("EU AI Act Reference: {}", articles.join(", ")),
            meta_style,
        ));
    }

    blocks.push(spacer(500).into());
    blocks.push(centered(
        &format!("Prepared by {}", opts.prepared_by),
        ParaStyle {
            color: Some(colors::GRAY.to_string()),
            size: Some(sizes::SMALL),
            ..Default::default()
        },
    ));
    blocks.push(centered(
        &format!(
            "Generated by the {} compliance platform on {}",
            opts.organization,
            format_date(Some(opts.date))
        ),
        ParaStyle {
            italics: true,
            color: Some(colors::GRAY_LIGHT.to_string()),
            size: Some(sizes::TINY),
            ..Default::default()
        },
    ));

    if opts.quality == QualityTier::Enterprise && opts.certification_number.is_some() {
        blocks.push(spacer(300).into());
        blocks.extend(create_certification_badge(opts));
    }

    blocks.push(page_break().into());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::blocks_text;
    use crate::models::Confidentiality;

    fn options(quality: QualityTier) -> EnterpriseDocumentOptions {
        EnterpriseDocumentOptions {
            quality,
            title: "Risk Assessment".to_string(),
            subtitle: None,
            document_type: "risk".to_string(),
            version: "1.0".to_string(),
            date: chrono::Utc::now(),
            organization: "Acme Corp".to_string(),
            prepared_by: "Jane Doe".to_string(),
            system_name: Some("Resume Screener".to_string()),
            risk_level: Some("high".to_string()),
            confidentiality: Confidentiality::Internal,
            confidential: false,
            eu_ai_act_articles: None,
            certification_number: None,
            certification_date: None,
            brand_color: None,
        }
    }

    #[test]
    fn cover_carries_system_risk_and_articles() {
        let text = blocks_text(&create_cover_page(&options(QualityTier::Standard)));
        assert!(text.contains("ACME CORP"));
        assert!(text.contains("AI System: Resume Screener"));
        assert!(text.contains("Risk Classification: HIGH RISK"));
        assert!(text.contains("EU AI Act Reference: Article 9"));
        assert!(text.contains("Classification: Internal"));
        assert!(text.contains("Prepared by Jane Doe"));
    }

    #[test]
    fn badge_requires_enterprise_and_certificate() {
        let mut opts = options(QualityTier::Enterprise);
        assert!(!blocks_text(&create_cover_page(&opts)).contains("EU AI ACT COMPLIANT"));
        opts.certification_number = Some("EUAIA-2025-0042".to_string());
        assert!(blocks_text(&create_cover_page(&opts)).contains("EU AI ACT COMPLIANT"));

        // Standard tier never shows the badge even with a certificate.
        let mut std_opts = options(QualityTier::Standard);
        std_opts.certification_number = Some("EUAIA-2025-0042".to_string());
        assert!(!blocks_text(&create_cover_page(&std_opts)).contains("EU AI ACT COMPLIANT"));
    }
}
