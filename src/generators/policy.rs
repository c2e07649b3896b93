// compliance-docgen/src/generators/policy.rs

use crate::builders::{body, bullet, heading, Block};
use crate::models::DocumentData;

use super::ContentGenerator;

/// Data governance policy per Article 10 of the EU AI Act.
pub struct PolicyGenerator;

const GOVERNANCE_PRINCIPLES: [&str; 5] = [
    "Accuracy: data must correctly represent the real-world entities it describes",
    "Completeness: data sets must cover the populations the system serves",
    "Consistency: data must not contradict itself across sources and versions",
    "Timeliness: data must be current enough for the system's intended purpose",
    "Validity: data must conform to its defined formats and value ranges",
];

impl ContentGenerator for PolicyGenerator {
    fn generate(&self, data: &DocumentData) -> Vec<Block> {
        let system = data.system.as_ref();
        let system_name = system.map(|s| s.name.as_str()).unwrap_or("the AI system");

        let mut blocks: Vec<Block> = Vec::new();

        blocks.push(heading("1. Purpose", 1).into());
        blocks.push(
            body(&format!(
                "This policy establishes the data governance framework for {} in \
                 accordance with Article 10 of the EU AI Act, covering training, \
                 validation, and testing data practices.",
                system_name
            ))
            .into(),
        );

        blocks.push(heading("2. Scope", 1).into());
        blocks.push(
            body(data.answer("scope").unwrap_or(
                "This policy applies to all data sets used to develop, validate, \
                 and operate the AI system, and to all personnel handling them.",
            ))
            .into(),
        );

        blocks.push(heading("3. Data Sources", 1).into());
        blocks.push(
            body(data.answer("data_sources").unwrap_or(
                "The data sources for this system have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("4. Data Quality Assurance", 1).into());
        blocks.push(
            body(data.answer("quality_assurance").unwrap_or(
                "Data quality assurance procedures have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("5. Bias Mitigation", 1).into());
        blocks.push(
            body(data.answer("bias_mitigation").unwrap_or(
                "Bias examination and mitigation measures have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("6. Data Governance Principles", 1).into());
        blocks.push(body("All data sets are managed against these principles:").into());
        for principle in GOVERNANCE_PRINCIPLES {
            blocks.push(bullet(principle).into());
        }

        blocks.push(heading("7. Roles and Responsibilities", 1).into());
        blocks.push(
            body(data.answer("roles").unwrap_or(
                "Roles and responsibilities for data governance have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("8. Review and Updates", 1).into());
        blocks.push(
            body(data.answer("review").unwrap_or(
                "This policy is reviewed at least annually and whenever data \
                 practices change materially.",
            ))
            .into(),
        );

        blocks
    }
}
