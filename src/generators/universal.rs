// compliance-docgen/src/generators/universal.rs

use chrono::{DateTime, Utc};

use crate::builders::{body, heading, Block};
use crate::models::AiSection;
use crate::text::{detect_subheading, split_paragraphs, strip_markdown};

use super::attribution;

/// Convert AI-authored sections into formatted body content. Each section
/// becomes a numbered level-1 heading; paragraphs matching the labeled
/// subheading pattern become lettered level-2 headings, with the letter
/// index resetting at every section.
pub fn generate_from_ai_sections(
    sections: &[AiSection],
    company: &str,
    date: DateTime<Utc>,
) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        let title = strip_markdown(&section.title);
        blocks.push(heading(&format!("{}. {}", index + 1, title), 1).into());

        let content = strip_markdown(&section.content);
        let mut letter = 0usize;
        for paragraph in split_paragraphs(&content) {
            match detect_subheading(&paragraph) {
                Some(sub) => {
                    let prefix = (b'a' + (letter % 26) as u8) as char;
                    letter += 1;
                    blocks.push(heading(&format!("{}. {}", prefix, sub.label), 2).into());
                    blocks.push(body(&sub.body).into());
                }
                None => blocks.push(body(&paragraph).into()),
            }
        }
    }

    blocks.extend(attribution(company, date));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{block_text, blocks_text};

    fn section(title: &str, content: &str) -> AiSection {
        AiSection {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn subheadings_get_letters_that_reset_per_section() {
        let sections = vec![
            section(
                "Data Governance",
                "Data Sources: We collect logs and telemetry.\n\nMitigation: Reviewed quarterly.",
            ),
            section("Oversight", "Escalation: A human reviews every rejection."),
        ];
        let blocks = generate_from_ai_sections(&sections, "Acme Corp", chrono::Utc::now());
        let texts: Vec<String> = blocks.iter().map(block_text).collect();

        assert_eq!(texts[0], "1. Data Governance");
        assert_eq!(texts[1], "a. Data Sources");
        assert_eq!(texts[2], "We collect logs and telemetry.");
        assert_eq!(texts[3], "b. Mitigation");
        assert_eq!(texts[4], "Reviewed quarterly.");
        assert_eq!(texts[5], "2. Oversight");
        assert_eq!(texts[6], "a. Escalation");
        assert_eq!(texts[7], "A human reviews every rejection.");
    }

    #[test]
    fn markdown_is_stripped_from_titles_and_bodies() {
        let sections = vec![section("**Summary**", "Plain prose without labels.")];
        let text = blocks_text(&generate_from_ai_sections(
            &sections,
            "Acme Corp",
            chrono::Utc::now(),
        ));
        assert!(text.contains("1. Summary"));
        assert!(!text.contains("**"));
    }

    #[test]
    fn ends_with_attribution() {
        let blocks =
            generate_from_ai_sections(&[section("S", "body")], "Acme Corp", chrono::Utc::now());
        let last = block_text(blocks.last().unwrap());
        assert!(last.starts_with("Document generated by Acme Corp on "));
    }
}
