// compliance-docgen/src/generators/risk.rs

use crate::builders::{body, bullet, heading, key_value_table, Block};
use crate::models::DocumentData;

use super::ContentGenerator;

/// Risk assessment per Article 9 of the EU AI Act.
pub struct RiskAssessmentGenerator;

/// Fixed dimensions every assessment covers regardless of answers.
const RISK_MATRIX: [&str; 5] = [
    "Bias and discrimination: risk of unfair outcomes for protected groups",
    "Privacy and data protection: risk of unlawful processing of personal data",
    "Safety and reliability: risk of harmful or erroneous system behavior",
    "Transparency: risk of affected persons not understanding system decisions",
    "Human oversight: risk of insufficient human control over system outputs",
];

impl ContentGenerator for RiskAssessmentGenerator {
    fn generate(&self, data: &DocumentData) -> Vec<Block> {
        let system = data.system.as_ref();
        let system_name = system.map(|s| s.name.as_str()).unwrap_or("the AI system");

        let mut blocks: Vec<Block> = Vec::new();

        blocks.push(heading("1. Executive Summary", 1).into());
        blocks.push(
            body(&format!(
                "This risk assessment evaluates {} against the risk management \
                 requirements of Article 9 of the EU AI Act. It identifies known \
                 risks, the measures that mitigate them, and how they are monitored \
                 over the system lifecycle.",
                system_name
            ))
            .into(),
        );

        blocks.push(heading("2. System Information", 1).into());
        let description = system
            .and_then(|s| s.description.as_deref())
            .unwrap_or("No description provided");
        let risk = system
            .and_then(|s| s.risk_level.as_deref())
            .map(crate::enterprise::risk_level_label)
            .unwrap_or("NOT CLASSIFIED");
        blocks.push(
            key_value_table(&[
                ("Name", system_name),
                ("Description", description),
                ("Risk Classification", risk),
            ])
            .into(),
        );

        blocks.push(heading("3. Identified Risks", 1).into());
        blocks.push(
            body(data.answer("risks").unwrap_or(
                "No specific risks have been identified for this system yet.",
            ))
            .into(),
        );

        blocks.push(heading("4. Mitigation Measures", 1).into());
        blocks.push(
            body(data.answer("mitigation").unwrap_or(
                "Mitigation measures for this system have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("5. Monitoring Procedures", 1).into());
        blocks.push(
            body(data.answer("monitoring").unwrap_or(
                "Monitoring procedures for this system have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("6. Risk Matrix", 1).into());
        blocks.push(
            body("The following risk dimensions are assessed for every AI system:").into(),
        );
        for item in RISK_MATRIX {
            blocks.push(bullet(item).into());
        }

        blocks.push(heading("7. Recommendations", 1).into());
        blocks.push(
            body(data.answer("recommendations").unwrap_or(
                "Review this assessment quarterly and after any significant change \
                 to the system, its training data, or its deployment context.",
            ))
            .into(),
        );

        blocks
    }
}
