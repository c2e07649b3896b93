// compliance-docgen/src/generators/model_card.rs

use crate::builders::{body, bullet, heading, key_value_table, Block};
use crate::models::DocumentData;

use super::ContentGenerator;

/// Model card summarizing a system's capabilities, limits, and ethics
/// posture for transparency purposes (Articles 11 and 13).
pub struct ModelCardGenerator;

const ETHICAL_CONSIDERATIONS: [&str; 4] = [
    "Fairness: outputs are monitored for disparate impact across user groups",
    "Privacy: personal data is minimized and processed under a lawful basis",
    "Transparency: affected persons are informed that an AI system is in use",
    "Accountability: a named owner is responsible for the system's behavior",
];

impl ContentGenerator for ModelCardGenerator {
    fn generate(&self, data: &DocumentData) -> Vec<Block> {
        let system = data.system.as_ref();
        let system_name = system.map(|s| s.name.as_str()).unwrap_or("the model");

        let mut blocks: Vec<Block> = Vec::new();

        blocks.push(heading("1. Model Overview", 1).into());
        let description = system
            .and_then(|s| s.description.as_deref())
            .unwrap_or("No description provided");
        let risk = system
            .and_then(|s| s.risk_level.as_deref())
            .map(crate::enterprise::risk_level_label)
            .unwrap_or("NOT CLASSIFIED");
        let status = system
            .and_then(|s| s.status.as_deref())
            .unwrap_or("Not specified");
        blocks.push(
            key_value_table(&[
                ("Model Name", system_name),
                ("Description", description),
                ("Risk Classification", risk),
                ("Status", status),
            ])
            .into(),
        );

        blocks.push(heading("2. Intended Use", 1).into());
        let intended = data
            .answer("intended_use")
            .or_else(|| system.and_then(|s| s.purpose.as_deref()))
            .unwrap_or("The intended use of this model has not been specified.");
        blocks.push(body(intended).into());
        blocks.push(
            body(
                "Out-of-scope use: this model must not be used for purposes other \
                 than those described above without a new assessment.",
            )
            .into(),
        );

        blocks.push(heading("3. Capabilities", 1).into());
        blocks.push(
            body(data.answer("capabilities").unwrap_or(
                "The capabilities of this model have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("4. Limitations", 1).into());
        blocks.push(
            body(data.answer("limitations").unwrap_or(
                "The limitations of this model have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("5. Performance Metrics", 1).into());
        blocks.push(
            body(data.answer("performance").unwrap_or(
                "Performance metrics for this model have not been specified.",
            ))
            .into(),
        );

        blocks.push(heading("6. Training Data", 1).into());
        blocks.push(
            body(
                "Details of the training data, including provenance, preparation, \
                 and representativeness checks, are maintained in the data \
                 governance documentation for this system.",
            )
            .into(),
        );

        blocks.push(heading("7. Ethical Considerations", 1).into());
        for item in ETHICAL_CONSIDERATIONS {
            blocks.push(bullet(item).into());
        }

        blocks.push(heading("8. Recommendations", 1).into());
        blocks.push(
            body(data.answer("recommendations").unwrap_or(
                "Revalidate this model card whenever the model is retrained or its \
                 deployment context changes.",
            ))
            .into(),
        );

        blocks
    }
}
