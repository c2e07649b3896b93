// compliance-docgen/src/text.rs
//
// Text cleanup for AI-authored content. The upstream text service returns
// prose that may carry markdown emphasis and "Label: value" lines; the
// generators expect plain text plus explicit structure.

use regex::Regex;
use std::sync::OnceLock;

fn re(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static regex"))
}

static BOLD_STARS: OnceLock<Regex> = OnceLock::new();
static BOLD_UNDERSCORES: OnceLock<Regex> = OnceLock::new();
static ITALIC_STAR: OnceLock<Regex> = OnceLock::new();
static ITALIC_UNDERSCORE: OnceLock<Regex> = OnceLock::new();
static HEADER_MARKER: OnceLock<Regex> = OnceLock::new();
static BULLET_MARKER: OnceLock<Regex> = OnceLock::new();
static EXCESS_NEWLINES: OnceLock<Regex> = OnceLock::new();
static SUBHEADING: OnceLock<Regex> = OnceLock::new();

/// Strip markdown markers the AI service tends to emit: `**bold**`,
/// `__bold__`, `*italic*`, `_italic_`, `#` header markers, `-`/`*` bullet
/// markers, and runs of 3+ newlines (collapsed to 2).
pub fn strip_markdown(text: &str) -> String {
    let text = re(&BOLD_STARS, r"\*\*([^*]+)\*\*").replace_all(text, "$1");
    let text = re(&BOLD_UNDERSCORES, r"__([^_]+)__").replace_all(&text, "$1");
    let text = re(&ITALIC_STAR, r"\*([^*\n]+)\*").replace_all(&text, "$1");
    let text = re(&ITALIC_UNDERSCORE, r"_([^_\n]+)_").replace_all(&text, "$1");
    // Header and bullet markers count at line starts and after whitespace.
    let text = re(&HEADER_MARKER, r"(?m)(^|\s)#{1,6}\s+").replace_all(&text, "$1");
    let text = re(&BULLET_MARKER, r"(?m)(^|\s)[-*]\s+").replace_all(&text, "$1");
    let text = re(&EXCESS_NEWLINES, r"\n{3,}").replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// A paragraph recognized as a labeled subheading: "Data Sources: We
/// collect logs" splits into the label and the remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subheading {
    pub label: String,
    pub body: String,
}

/// Heuristic: a short label (3-50 chars, leading capital, no colon inside)
/// followed by a colon and further content marks a subheading. Kept behind
/// this function so callers never depend on the pattern itself.
pub fn detect_subheading(paragraph: &str) -> Option<Subheading> {
    let caps = re(&SUBHEADING, r"(?s)^([A-Z][^:\n]{2,49}):\s*(\S.*)$").captures(paragraph.trim())?;
    Some(Subheading {
        label: caps[1].trim().to_string(),
        body: caps[2].trim().to_string(),
    })
}

/// Split cleaned text into paragraphs on blank lines, dropping empties.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_marker_kinds() {
        assert_eq!(
            strip_markdown("**bold** and _italic_ and # Heading and - bullet"),
            "bold and italic and Heading and bullet"
        );
    }

    #[test]
    fn strips_line_start_markers() {
        assert_eq!(
            strip_markdown("## Overview\n- first\n- second"),
            "Overview\nfirst\nsecond"
        );
    }

    #[test]
    fn collapses_newline_runs() {
        assert_eq!(strip_markdown("one\n\n\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn detects_labeled_subheading() {
        let s = detect_subheading("Data Sources: We collect logs and telemetry.").unwrap();
        assert_eq!(s.label, "Data Sources");
        assert_eq!(s.body, "We collect logs and telemetry.");
    }

    #[test]
    fn rejects_lowercase_and_overlong_labels() {
        assert!(detect_subheading("data sources: lowercase start").is_none());
        let long = format!("{}: body", "A".repeat(60));
        assert!(detect_subheading(&long).is_none());
        assert!(detect_subheading("No colon in this sentence at all").is_none());
    }

    #[test]
    fn label_must_leave_content_after_colon() {
        assert!(detect_subheading("Trailing label:").is_none());
        assert!(detect_subheading("Trailing label:   ").is_none());
    }

    #[test]
    fn split_paragraphs_drops_blanks() {
        let parts = split_paragraphs("first\n\n\nsecond\n\n");
        assert_eq!(parts, vec!["first".to_string(), "second".to_string()]);
    }
}
