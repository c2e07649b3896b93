// compliance-docgen/src/generators/mod.rs

mod model_card;
mod policy;
mod risk;
mod technical;
mod universal;

pub use model_card::ModelCardGenerator;
pub use policy::PolicyGenerator;
pub use risk::RiskAssessmentGenerator;
pub use technical::TechnicalDocGenerator;
pub use universal::generate_from_ai_sections;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::builders::{format_date, rich_para, spacer, Block, TextRun};
use crate::models::{AiSection, DocumentData, DocumentKind, AI_GENERATED_KEY};
use crate::style::{colors, sizes};

/// Builds the body content for one document type. Implementations are pure;
/// every missing answer renders a field-appropriate placeholder sentence so
/// generated documents never contain blank sections.
pub trait ContentGenerator: Send + Sync {
    fn generate(&self, data: &DocumentData) -> Vec<Block>;
}

pub fn create_generator(kind: DocumentKind) -> Box<dyn ContentGenerator> {
    match kind {
        DocumentKind::Technical => Box::new(TechnicalDocGenerator),
        DocumentKind::Risk => Box::new(RiskAssessmentGenerator),
        DocumentKind::Policy => Box::new(PolicyGenerator),
        DocumentKind::ModelCard => Box::new(ModelCardGenerator),
    }
}

/// Resolve AI-authored sections: the first-class field wins, then the
/// legacy JSON-encoded answers key. A malformed legacy payload is logged
/// and ignored so generation falls back to the template path.
pub fn resolve_ai_sections(data: &DocumentData) -> Option<Vec<AiSection>> {
    if let Some(sections) = &data.ai_sections {
        if !sections.is_empty() {
            return Some(sections.clone());
        }
    }
    let raw = data.answers.get(AI_GENERATED_KEY)?;
    match serde_json::from_str::<Vec<AiSection>>(raw) {
        Ok(sections) if !sections.is_empty() => Some(sections),
        Ok(_) => None,
        Err(e) => {
            warn!(
                error = %e,
                document_type = data.kind.type_key(),
                "Malformed AI section payload, using template content"
            );
            None
        }
    }
}

/// Body content for a document: AI-authored sections when present,
/// otherwise the per-type template. `company` is the organization already
/// resolved by the caller (options first, then metadata), so the attribution
/// line always matches the cover branding.
pub fn generate_content(data: &DocumentData, company: &str) -> Vec<Block> {
    if let Some(sections) = resolve_ai_sections(data) {
        info!(
            document_type = data.kind.type_key(),
            sections = sections.len(),
            "Using AI-authored sections"
        );
        return generate_from_ai_sections(&sections, company, data.metadata.date);
    }
    let mut blocks = create_generator(data.kind).generate(data);
    blocks.extend(attribution(company, data.metadata.date));
    blocks
}

/// Closing attribution appended to every document body. The company name is
/// emphasized inside the gray small-print line.
pub(crate) fn attribution(company: &str, date: DateTime<Utc>) -> Vec<Block> {
    let small_gray = |text: String| {
        TextRun::new(text)
            .italics()
            .color(colors::GRAY)
            .size(sizes::SMALL)
    };
    vec![
        spacer(300).into(),
        rich_para(
            &[
                small_gray("Document generated by ".to_string()),
                small_gray(company.to_string()).bold(),
                small_gray(format!(" on {}", format_date(Some(date)))),
            ],
            None,
        )
        .into(),
    ]
}
