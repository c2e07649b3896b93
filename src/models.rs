// compliance-docgen/src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved answers key carrying pre-serialized AI sections from the
/// legacy assessment flow. `DocumentData::ai_sections` is the preferred
/// first-class field; this key is still honored for older callers.
pub const AI_GENERATED_KEY: &str = "_aiGenerated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Docx,
    Pdf,
}

/// The four implemented document types. Adding a variant requires a new
/// content generator plus entries in the display-name and article tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Technical,
    Risk,
    Policy,
    ModelCard,
}

impl DocumentKind {
    /// Stable string key used by the display-name and article lookup tables.
    pub fn type_key(&self) -> &'static str {
        match self {
            DocumentKind::Technical => "technical",
            DocumentKind::Risk => "risk",
            DocumentKind::Policy => "policy",
            DocumentKind::ModelCard => "model_card",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub prepared_by: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub confidential: bool,
}

fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSystemInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub data_processed: Option<String>,
    #[serde(default)]
    pub intended_users: Option<String>,
    #[serde(default)]
    pub decision_making: Option<String>,
}

/// One AI-authored section. `content` is free text that may carry markdown
/// emphasis and "Label: value" subheading patterns; see `text.rs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSection {
    pub title: String,
    pub content: String,
}

/// Input for one generation call: a document type tag, artifact metadata,
/// the AI system the document is about, and the per-type answer record
/// collected by the assessment wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentData {
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub metadata: DocumentMetadata,
    #[serde(default)]
    pub system: Option<AiSystemInfo>,
    #[serde(default)]
    pub answers: HashMap<String, String>,
    /// When present, replaces template-driven content entirely.
    #[serde(default)]
    pub ai_sections: Option<Vec<AiSection>>,
}

impl DocumentData {
    /// Look up a free-text answer, treating blank strings as absent.
    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers
            .get(key)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    #[default]
    Basic,
    Standard,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Confidentiality {
    Public,
    #[default]
    Internal,
    Confidential,
    StrictlyConfidential,
}

impl Confidentiality {
    pub fn label(&self) -> &'static str {
        match self {
            Confidentiality::Public => "Public",
            Confidentiality::Internal => "Internal",
            Confidentiality::Confidential => "Confidential",
            Confidentiality::StrictlyConfidential => "Strictly Confidential",
        }
    }
}

/// Branding and output options forwarded into the formatting layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerateDocumentOptions {
    #[serde(default)]
    pub format: DocumentFormat,
    #[serde(default)]
    pub quality: QualityTier,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub prepared_by: Option<String>,
    #[serde(default)]
    pub confidentiality: Confidentiality,
    /// Explicit EU AI Act article references; when absent, resolved from the
    /// document-type lookup table.
    #[serde(default)]
    pub eu_ai_act_articles: Option<Vec<String>>,
    #[serde(default)]
    pub certification_number: Option<String>,
    #[serde(default)]
    pub certification_date: Option<DateTime<Utc>>,
    /// Custom heading color override (hex, no leading '#'). Enterprise only.
    #[serde(default)]
    pub brand_color: Option<String>,
}

/// Inbound request envelope consumed by the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentGenerationRequest {
    pub data: DocumentData,
    #[serde(default)]
    pub options: GenerateDocumentOptions,
    /// Write the artifact to the configured output directory.
    #[serde(default = "default_true")]
    pub download: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub format: DocumentFormat,
    pub filename: String,
    pub size_bytes: usize,
    pub sha256_checksum: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentGenerationResponse {
    pub request_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<GeneratedArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl DocumentGenerationResponse {
    pub fn success(request_id: String, artifact: GeneratedArtifact) -> Self {
        Self {
            request_id,
            status: "success".to_string(),
            artifact: Some(artifact),
            error: None,
            generated_at: Utc::now(),
        }
    }

    pub fn error(request_id: String, error: String) -> Self {
        Self {
            request_id,
            status: "error".to_string(),
            artifact: None,
            error: Some(error),
            generated_at: Utc::now(),
        }
    }
}
