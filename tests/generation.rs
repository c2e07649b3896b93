// compliance-docgen/tests/generation.rs
//
// End-to-end generation scenarios: tier gating, placeholder behavior, and
// the packed artifact format.

use compliance_docgen::assembly::{compose, generate_document, generate_universal_document};
use compliance_docgen::builders::{blocks_text, Block};
use compliance_docgen::enterprise::EnterpriseDocumentOptions;
use compliance_docgen::generators::generate_content;
use compliance_docgen::models::*;
use compliance_docgen::DocumentError;

fn technical_data() -> DocumentData {
    DocumentData {
        kind: DocumentKind::Technical,
        metadata: DocumentMetadata {
            title: "Technical Documentation".to_string(),
            subtitle: None,
            version: "1.0".to_string(),
            date: chrono::Utc::now(),
            prepared_by: Some("Jane Doe".to_string()),
            company_name: Some("Acme Corp".to_string()),
            confidential: false,
        },
        system: Some(AiSystemInfo {
            id: "sys-1".to_string(),
            name: "Resume Screener".to_string(),
            description: None,
            risk_level: Some("high".to_string()),
            status: None,
            purpose: None,
            data_processed: None,
            intended_users: None,
            decision_making: None,
        }),
        answers: [("purpose".to_string(), "Screens job applicants".to_string())]
            .into_iter()
            .collect(),
        ai_sections: None,
    }
}

fn options(quality: QualityTier) -> GenerateDocumentOptions {
    GenerateDocumentOptions {
        quality,
        ..Default::default()
    }
}

fn composed(data: &DocumentData, opts: &GenerateDocumentOptions) -> Vec<Block> {
    let ent = EnterpriseDocumentOptions::from_request(data, opts);
    compose(generate_content(data, &ent.organization), &ent)
}

fn has_toc(blocks: &[Block]) -> bool {
    blocks.iter().any(|b| matches!(b, Block::Toc(_)))
}

#[test]
fn standard_technical_document_end_to_end() {
    let data = technical_data();
    let blocks = composed(&data, &options(QualityTier::Standard));
    let text = blocks_text(&blocks);

    // Cover page with system name and risk label.
    let cover = text.find("AI System: Resume Screener").expect("cover system line");
    assert!(text.contains("Risk Classification: HIGH RISK"));

    // Document control section follows the cover page.
    let doc_control = text.find("Document Control").expect("document control");
    assert!(cover < doc_control);
    assert!(text.contains("Technical Documentation"));

    // Body sections in order, with the documented placeholder.
    let purpose = text.find("3. Intended Purpose").expect("purpose heading");
    let purpose_body = text.find("Screens job applicants").expect("purpose body");
    let processing = text.find("4. Data Processing").expect("processing heading");
    let data_types = text.find("4.1 Data Types Processed").expect("data types heading");
    let placeholder = text
        .find("The data types processed by this system have not been specified.")
        .expect("placeholder");
    assert!(purpose < purpose_body);
    assert!(purpose_body < processing);
    assert!(processing < data_types);
    assert!(data_types < placeholder);

    // Standard tier: no ToC, no signature block.
    assert!(!has_toc(&blocks));
    assert!(!text.contains("Document Sign-Off"));
}

#[test]
fn basic_tier_skips_the_enterprise_layer() {
    let data = technical_data();
    let blocks = composed(&data, &options(QualityTier::Basic));
    let text = blocks_text(&blocks);

    assert!(!has_toc(&blocks));
    assert!(!text.contains("Document Control"));
    assert!(!text.contains("Document Sign-Off"));
    assert!(!text.contains("EU AI ACT COMPLIANT"));
    // Plain title shell still present.
    assert!(text.contains("Technical Documentation"));
}

#[test]
fn enterprise_tier_includes_every_block_when_certified() {
    let data = technical_data();
    let mut opts = options(QualityTier::Enterprise);
    opts.certification_number = Some("EUAIA-2025-0042".to_string());
    let blocks = composed(&data, &opts);
    let text = blocks_text(&blocks);

    assert!(has_toc(&blocks));
    assert!(text.contains("Document Control"));
    assert!(text.contains("Document Sign-Off"));
    assert!(text.contains("EU AI ACT COMPLIANT"));
    assert!(text.contains("Certificate No. EUAIA-2025-0042"));
}

#[test]
fn enterprise_without_certificate_omits_only_the_badge() {
    let data = technical_data();
    let blocks = composed(&data, &options(QualityTier::Enterprise));
    let text = blocks_text(&blocks);

    assert!(has_toc(&blocks));
    assert!(text.contains("Document Sign-Off"));
    assert!(!text.contains("EU AI ACT COMPLIANT"));
}

#[test]
fn ai_sections_replace_template_content() {
    let mut data = technical_data();
    data.ai_sections = Some(vec![AiSection {
        title: "System Description".to_string(),
        content: "Data Sources: We collect logs and telemetry.\n\nMitigation: Reviewed quarterly."
            .to_string(),
    }]);
    let text = blocks_text(&composed(&data, &options(QualityTier::Basic)));

    assert!(text.contains("1. System Description"));
    assert!(text.contains("a. Data Sources"));
    assert!(text.contains("b. Mitigation"));
    // Template sections are fully replaced.
    assert!(!text.contains("Compliance Statement"));
}

#[test]
fn options_branding_reaches_the_attribution_line() {
    let mut data = technical_data();
    data.metadata.company_name = None;
    let mut opts = options(QualityTier::Standard);
    opts.company_name = Some("Branded Co".to_string());
    let text = blocks_text(&composed(&data, &opts));

    // Cover and attribution agree on the organization.
    assert!(text.contains("BRANDED CO"));
    assert!(text.contains("Document generated by Branded Co"));
    assert!(!text.contains("Your Organization"));
}

#[tokio::test]
async fn packed_artifact_is_a_zip_container() {
    let bytes = generate_document(&technical_data(), &options(QualityTier::Standard))
        .await
        .expect("generation succeeds");
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn universal_document_generates() {
    let data = technical_data();
    let sections = vec![AiSection {
        title: "Overview".to_string(),
        content: "Plain prose.".to_string(),
    }];
    let bytes = generate_universal_document(
        &sections,
        &data.metadata,
        data.system.as_ref(),
        &options(QualityTier::Enterprise),
    )
    .await
    .expect("generation succeeds");
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn pdf_format_is_rejected() {
    let opts = GenerateDocumentOptions {
        format: DocumentFormat::Pdf,
        ..Default::default()
    };
    let err = generate_document(&technical_data(), &opts)
        .await
        .expect_err("pdf is unimplemented");
    assert!(matches!(err, DocumentError::UnsupportedFormat(_)));
}
