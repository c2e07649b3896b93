// compliance-docgen/src/enterprise/signature.rs

use crate::builders::{body, data_table, heading, page_break, para, Block, ParaStyle};
use crate::style::{colors, sizes};

use super::EnterpriseDocumentOptions;

/// Sign-off section: explanatory text plus a four-column signature table.
/// "Prepared By" is pre-filled; review and approval rows are completed by
/// hand. Enterprise tier only.
pub fn create_signature_block(opts: &EnterpriseDocumentOptions) -> Vec<Block> {
    vec![
        page_break().into(),
        heading("Document Sign-Off", 1).into(),
        body(
            "This document requires review and approval by the responsible parties \
             listed below before it can be submitted as compliance evidence.",
        )
        .into(),
        data_table(
            &["Role", "Name", "Signature", "Date"],
            &[
                vec![
                    "Prepared By".to_string(),
                    opts.prepared_by.clone(),
                    String::new(),
                    String::new(),
                ],
                vec![
                    "Reviewed By".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
                vec![
                    "Approved By".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
            ],
        )
        .into(),
        para(
            "By signing above, the signatories confirm that this document accurately \
             reflects the state of the AI system described herein at the date of signature.",
            &ParaStyle {
                italics: true,
                color: Some(colors::GRAY.to_string()),
                size: Some(sizes::SMALL),
                ..Default::default()
            },
        )
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::blocks_text;
    use crate::models::{Confidentiality, QualityTier};

    #[test]
    fn signature_table_prefills_preparer_only() {
        let opts = EnterpriseDocumentOptions {
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
            certification_number: None,
            certification_date: None,
            brand_color: None,
        };
        let text = blocks_text(&create_signature_block(&opts));
        assert!(text.contains("Prepared By"));
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Reviewed By"));
        assert!(text.contains("Approved By"));
    }
}
