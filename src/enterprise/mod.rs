// compliance-docgen/src/enterprise/mod.rs

mod badge;
mod chrome;
mod control;
mod cover;
mod signature;
mod toc;

pub use badge::create_certification_badge;
pub(crate) use chrome::field_runs;
pub use chrome::{create_enterprise_footer, create_enterprise_header};
pub use control::create_document_control_section;
pub use cover::create_cover_page;
pub use signature::create_signature_block;
pub use toc::create_table_of_contents_section;

use chrono::{DateTime, Utc};

use crate::models::{
    AiSystemInfo, Confidentiality, DocumentData, DocumentMetadata, GenerateDocumentOptions,
    QualityTier,
};
use crate::style::colors;

/// Metadata contract consumed by the formatting blocks in this module.
#[derive(Debug, Clone)]
pub struct EnterpriseDocumentOptions {
    pub quality: QualityTier,
    pub title: String,
    pub subtitle: Option<String>,
    /// Open string key; resolved through the display-name and article tables.
    pub document_type: String,
    pub version: String,
    pub date: DateTime<Utc>,
    pub organization: String,
    pub prepared_by: String,
    pub system_name: Option<String>,
    pub risk_level: Option<String>,
    pub confidentiality: Confidentiality,
    /// Legacy confidential flag from the metadata; drives the basic shell's
    /// header label.
    pub confidential: bool,
    pub eu_ai_act_articles: Option<Vec<String>>,
    pub certification_number: Option<String>,
    pub certification_date: Option<DateTime<Utc>>,
    pub brand_color: Option<String>,
}

impl EnterpriseDocumentOptions {
    pub fn from_request(data: &DocumentData, options: &GenerateDocumentOptions) -> Self {
        Self::from_parts(
            data.kind.type_key(),
            &data.metadata,
            data.system.as_ref(),
            options,
        )
    }

    pub fn from_parts(
        document_type: &str,
        meta: &DocumentMetadata,
        system: Option<&AiSystemInfo>,
        options: &GenerateDocumentOptions,
    ) -> Self {
        Self {
            quality: options.quality,
            title: meta.title.clone(),
            subtitle: meta.subtitle.clone(),
            document_type: document_type.to_string(),
            version: meta.version.clone(),
            date: meta.date,
            organization: options
                .company_name
                .clone()
                .or_else(|| meta.company_name.clone())
                .unwrap_or_else(|| "Your Organization".to_string()),
            prepared_by: options
                .prepared_by
                .clone()
                .or_else(|| meta.prepared_by.clone())
                .unwrap_or_else(|| "Not specified".to_string()),
            system_name: system.map(|s| s.name.clone()),
            risk_level: system.and_then(|s| s.risk_level.clone()),
            confidentiality: options.confidentiality,
            confidential: meta.confidential,
            eu_ai_act_articles: options.eu_ai_act_articles.clone(),
            certification_number: options.certification_number.clone(),
            certification_date: options.certification_date,
            brand_color: options.brand_color.clone(),
        }
    }

    /// Explicit article list when supplied, otherwise the static
    /// document-type lookup. Empty for unknown types.
    pub fn articles(&self) -> Vec<String> {
        match &self.eu_ai_act_articles {
            Some(list) if !list.is_empty() => list.clone(),
            _ => document_type_articles(&self.document_type)
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }

    /// Heading color: the custom brand color applies at enterprise tier only.
    pub fn heading_color(&self) -> &str {
        match (&self.quality, &self.brand_color) {
            (QualityTier::Enterprise, Some(color)) => color.as_str(),
            _ => colors::PRIMARY,
        }
    }
}

/// Block inclusion per quality tier. Adding a tier or a block is an edit to
/// this table, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierFeatures {
    pub cover_page: bool,
    pub document_control: bool,
    pub table_of_contents: bool,
    pub enhanced_chrome: bool,
    pub signature_block: bool,
    pub certification_badge: bool,
    pub auto_update_fields: bool,
}

pub const fn tier_features(tier: QualityTier) -> TierFeatures {
    match tier {
        QualityTier::Basic => TierFeatures {
            cover_page: false,
            document_control: false,
            table_of_contents: false,
            enhanced_chrome: false,
            signature_block: false,
            certification_badge: false,
            auto_update_fields: false,
        },
        QualityTier::Standard => TierFeatures {
            cover_page: true,
            document_control: true,
            table_of_contents: false,
            enhanced_chrome: true,
            signature_block: false,
            certification_badge: false,
            auto_update_fields: false,
        },
        QualityTier::Enterprise => TierFeatures {
            cover_page: true,
            document_control: true,
            table_of_contents: true,
            enhanced_chrome: true,
            signature_block: true,
            certification_badge: true,
            auto_update_fields: true,
        },
    }
}

/// Display names for the wider planned document-type vocabulary. Only four
/// of these have generators today; the rest are referenced by dashboards
/// and the article table.
const DOCUMENT_TYPE_NAMES: &[(&str, &str)] = &[
    ("technical", "Technical Documentation"),
    ("risk", "Risk Assessment"),
    ("policy", "Data Governance Policy"),
    ("model_card", "Model Card"),
    ("universal", "Compliance Document"),
    ("qms", "Quality Management System"),
    ("risk_management", "Risk Management Plan"),
    ("data_governance", "Data Governance Framework"),
    ("conformity_assessment", "Conformity Assessment"),
    ("declaration_of_conformity", "EU Declaration of Conformity"),
    ("ce_marking", "CE Marking Documentation"),
    ("transparency_notice", "Transparency Notice"),
    ("instructions_for_use", "Instructions for Use"),
    ("human_oversight", "Human Oversight Procedure"),
    ("accuracy_robustness", "Accuracy and Robustness Report"),
    ("cybersecurity", "Cybersecurity Assessment"),
    ("logging_policy", "Logging Policy"),
    ("record_keeping", "Record-Keeping Procedure"),
    ("post_market_monitoring", "Post-Market Monitoring Plan"),
    ("serious_incident_report", "Serious Incident Report"),
    ("incident_response", "Incident Response Plan"),
    ("corrective_actions", "Corrective Actions Report"),
    ("fria", "Fundamental Rights Impact Assessment"),
    ("registration", "EU Database Registration"),
    ("gpai_model_report", "GPAI Model Report"),
    ("training_data_summary", "Training Data Summary"),
    ("user_notification", "User Notification Notice"),
    ("ai_literacy", "AI Literacy Programme"),
    ("prohibited_practices", "Prohibited Practices Review"),
];

/// EU AI Act article references per document type. Unknown types resolve to
/// an empty list and the reference section is omitted.
const DOCUMENT_TYPE_ARTICLES: &[(&str, &[&str])] = &[
    ("technical", &["Article 11"]),
    ("risk", &["Article 9"]),
    ("policy", &["Article 10"]),
    ("model_card", &["Article 11", "Article 13"]),
    ("qms", &["Article 17"]),
    ("risk_management", &["Article 9"]),
    ("data_governance", &["Article 10"]),
    ("conformity_assessment", &["Article 43"]),
    ("declaration_of_conformity", &["Article 47"]),
    ("ce_marking", &["Article 48"]),
    ("transparency_notice", &["Article 13", "Article 50"]),
    ("instructions_for_use", &["Article 13"]),
    ("human_oversight", &["Article 14"]),
    ("accuracy_robustness", &["Article 15"]),
    ("cybersecurity", &["Article 15"]),
    ("logging_policy", &["Article 12"]),
    ("record_keeping", &["Article 12", "Article 19"]),
    ("post_market_monitoring", &["Article 72"]),
    ("serious_incident_report", &["Article 73"]),
    ("incident_response", &["Article 73"]),
    ("corrective_actions", &["Article 20"]),
    ("fria", &["Article 27"]),
    ("registration", &["Article 49"]),
    ("gpai_model_report", &["Article 53"]),
    ("training_data_summary", &["Article 53"]),
    ("user_notification", &["Article 50"]),
    ("ai_literacy", &["Article 4"]),
    ("prohibited_practices", &["Article 5"]),
];

/// Display name for a document type; unknown types are humanized from
/// their key ("incident_review" → "Incident Review").
pub fn document_type_name(doc_type: &str) -> String {
    if let Some((_, name)) = DOCUMENT_TYPE_NAMES.iter().find(|(k, _)| *k == doc_type) {
        return (*name).to_string();
    }
    doc_type
        .split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn document_type_articles(doc_type: &str) -> &'static [&'static str] {
    DOCUMENT_TYPE_ARTICLES
        .iter()
        .find(|(k, _)| *k == doc_type)
        .map(|(_, articles)| *articles)
        .unwrap_or(&[])
}

/// Display label for a risk classification string.
pub fn risk_level_label(risk_level: &str) -> &'static str {
    match risk_level.to_ascii_lowercase().as_str() {
        "minimal" => "MINIMAL RISK",
        "limited" => "LIMITED RISK",
        "high" => "HIGH RISK",
        "unacceptable" => "UNACCEPTABLE RISK",
        _ => "NOT CLASSIFIED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qms_resolves_article_17() {
        assert_eq!(document_type_articles("qms"), &["Article 17"]);
    }

    #[test]
    fn unknown_type_has_no_articles() {
        assert!(document_type_articles("shadow_it_register").is_empty());
    }

    #[test]
    fn unknown_type_name_is_humanized() {
        assert_eq!(
            document_type_name("incident_review_log"),
            "Incident Review Log"
        );
    }

    #[test]
    fn known_type_name_comes_from_table() {
        assert_eq!(document_type_name("model_card"), "Model Card");
    }

    #[test]
    fn risk_labels() {
        assert_eq!(risk_level_label("high"), "HIGH RISK");
        assert_eq!(risk_level_label("HIGH"), "HIGH RISK");
        assert_eq!(risk_level_label("weird"), "NOT CLASSIFIED");
    }

    #[test]
    fn basic_tier_disables_every_block() {
        let f = tier_features(crate::models::QualityTier::Basic);
        assert!(
            !f.cover_page
                && !f.document_control
                && !f.table_of_contents
                && !f.signature_block
                && !f.certification_badge
        );
    }

    #[test]
    fn explicit_articles_beat_the_table() {
        use crate::models::*;
        let data = DocumentData {
            kind: DocumentKind::Risk,
            metadata: DocumentMetadata {
                title: "T".into(),
                subtitle: None,
                version: "1.0".into(),
                date: chrono::Utc::now(),
                prepared_by: None,
                company_name: None,
                confidential: false,
            },
            system: None,
            answers: Default::default(),
            ai_sections: None,
        };
        let opts = GenerateDocumentOptions {
            eu_ai_act_articles: Some(vec!["Article 6".into(), "Article 7".into()]),
            ..Default::default()
        };
        let ent = EnterpriseDocumentOptions::from_request(&data, &opts);
        assert_eq!(ent.articles(), vec!["Article 6", "Article 7"]);
    }
}
