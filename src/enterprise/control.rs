// compliance-docgen/src/enterprise/control.rs

use crate::builders::{data_table, format_date, heading, key_value_table, page_break, Block};

use super::{document_type_name, risk_level_label, EnterpriseDocumentOptions};

/// "Document Control" section: a key-value table of artifact metadata
/// followed by a seeded version-history table. Terminates in a page break.
pub fn create_document_control_section(opts: &EnterpriseDocumentOptions) -> Vec<Block> {
    let type_name = document_type_name(&opts.document_type);
    let date = format_date(Some(opts.date));
    let articles = opts.articles().join(", ");

    let mut pairs: Vec<(&str, &str)> = vec![
        ("Document Title", opts.title.as_str()),
        ("Document Type", type_name.as_str()),
        ("Version", opts.version.as_str()),
        ("Date", date.as_str()),
        ("Status", "Draft"),
        ("Prepared By", opts.prepared_by.as_str()),
        ("Organization", opts.organization.as_str()),
        ("Classification", opts.confidentiality.label()),
    ];
    let risk_label = opts.risk_level.as_deref().map(risk_level_label);
    if let Some(system) = &opts.system_name {
        pairs.push(("AI System", system.as_str()));
    }
    if let Some(label) = risk_label {
        pairs.push(("Risk Classification", label));
    }
    if !articles.is_empty() {
        pairs.push(("EU AI Act Reference", articles.as_str()));
    }

    vec![
        heading("Document Control", 1).into(),
        key_value_table(&pairs).into(),
        heading("Version History", 2).into(),
        data_table(
            &["Version", "Date", "Author", "Description"],
            &[
                vec![
                    opts.version.clone(),
                    date.clone(),
                    opts.prepared_by.clone(),
                    "Initial version".to_string(),
                ],
                // Blank row reserved for the next revision.
                vec![String::new(), String::new(), String::new(), String::new()],
            ],
        )
        .into(),
        page_break().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::blocks_text;
    use crate::models::{Confidentiality, QualityTier};

    #[test]
    fn control_section_lists_type_status_and_history() {
        let opts = EnterpriseDocumentOptions {
            quality: QualityTier::Standard,
            title: "Tech Doc".to_string(),
            subtitle: None,
            document_type: "technical".to_string(),
            version: "2.1".to_string(),
            date: chrono::Utc::now(),
            organization: "Acme Corp".to_string(),
            prepared_by: "Jane Doe".to_string(),
            system_name: Some("Resume Screener".to_string()),
            risk_level: Some("limited".to_string()),
            confidentiality: Confidentiality::Confidential,
            confidential: false,
            eu_ai_act_articles: None,
            certification_number: None,
            certification_date: None,
            brand_color: None,
        };
        let text = blocks_text(&create_document_control_section(&opts));
        assert!(text.contains("Document Control"));
        assert!(text.contains("Technical Documentation"));
        assert!(text.contains("Draft"));
        assert!(text.contains("Version History"));
        assert!(text.contains("Initial version"));
        assert!(text.contains("LIMITED RISK"));
        assert!(text.contains("Article 11"));
    }
}
