// compliance-docgen/src/generators/technical.rs

use crate::builders::{body, heading, key_value_table, Block};
use crate::models::DocumentData;

use super::ContentGenerator;

/// Technical documentation per Article 11 of the EU AI Act.
pub struct TechnicalDocGenerator;

impl ContentGenerator for TechnicalDocGenerator {
    fn generate(&self, data: &DocumentData) -> Vec<Block> {
        let system = data.system.as_ref();
        let system_name = system.map(|s| s.name.as_str()).unwrap_or("the AI system");

        let mut blocks: Vec<Block> = Vec::new();

        blocks.push(heading("1. Executive Summary", 1).into());
        blocks.push(
            body(&format!(
                "This document provides the technical documentation for {} as required \
                 by Article 11 and Annex IV of the EU AI Act. It describes the system's \
                 intended purpose, the data it processes, and how it reaches its outputs.",
                system_name
            ))
            .into(),
        );

        blocks.push(heading("2. System Overview", 1).into());
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
                ("Name", system_name),
                ("Description", description),
                ("Risk Classification", risk),
                ("Status", status),
            ])
            .into(),
        );

        blocks.push(heading("3. Intended Purpose", 1).into());
        let purpose = data
            .answer("purpose")
            .or_else(|| system.and_then(|s| s.purpose.as_deref()))
            .unwrap_or("The intended purpose of this AI system has not been specified.");
        blocks.push(body(purpose).into());

        blocks.push(heading("4. Data Processing", 1).into());
        let processing = data.answer("data_processing").unwrap_or(
            "Data processing practices for this AI system have not been specified.",
        );
        blocks.push(body(processing).into());
        blocks.push(heading("4.1 Data Types Processed", 2).into());
        let data_types = data
            .answer("data_types")
            .or_else(|| system.and_then(|s| s.data_processed.as_deref()))
            .unwrap_or("The data types processed by this system have not been specified.");
        blocks.push(body(data_types).into());

        blocks.push(heading("5. Decision-Making Process", 1).into());
        let decisions = data
            .answer("decision_making")
            .or_else(|| system.and_then(|s| s.decision_making.as_deref()))
            .unwrap_or("The decision-making process of this system has not been specified.");
        blocks.push(body(decisions).into());

        blocks.push(heading("6. Intended Users", 1).into());
        let users = data
            .answer("intended_users")
            .or_else(|| system.and_then(|s| s.intended_users.as_deref()))
            .unwrap_or("The intended users of this system have not been specified.");
        blocks.push(body(users).into());

        blocks.push(heading("7. Compliance Statement", 1).into());
        blocks.push(
            body(
                "This technical documentation is maintained as part of the provider's \
                 quality management system and is kept up to date for the lifetime of \
                 the AI system, in line with Article 11 of the EU AI Act.",
            )
            .into(),
        );

        blocks
    }
}
