//! Fixed text patterns used by the heuristics.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of whitespace long enough to suggest column layout.
    pub static ref EXCESSIVE_SPACING: Regex = Regex::new(r"\s{4,}").unwrap();
}

/// Word-boundary pattern for a literal catalog keyword.
///
/// The boundary is "start/end of line or a character outside `[0-9A-Za-z_]`",
/// so keywords that end in punctuation ("C++", "C#") still match. Word
/// characters are ASCII only; a Unicode `\w` on both sides of every catalog
/// keyword blows past the regex size limit once compiled into one set.
/// Matching is case-insensitive.
pub fn keyword_pattern(keyword: &str) -> String {
    format!(
        r"(?i)(?:^|[^0-9A-Za-z_]){}(?:[^0-9A-Za-z_]|$)",
        regex::escape(keyword)
    )
}

/// Substrings whose presence counts as quantified results.
pub const ACHIEVEMENT_MARKERS: &[&str] = &["achievement", "result"];

/// General ATS formatting advice attached to every report.
pub const FORMATTING_RECOMMENDATIONS: &[&str] = &[
    "Use standard fonts (Arial, Calibri, Times New Roman)",
    "Avoid tables, text boxes, and graphics",
    "Use consistent formatting throughout",
    "Save as PDF to preserve formatting",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(keyword: &str, line: &str) -> bool {
        Regex::new(&keyword_pattern(keyword)).unwrap().is_match(line)
    }

    #[test]
    fn test_keyword_pattern_whole_words() {
        assert!(matches("Java", "Java, Kotlin"));
        assert!(!matches("Java", "JavaScript developer"));
        assert!(matches("JavaScript", "senior javascript developer"));
        assert!(!matches("Go", "Google Ads"));
    }

    #[test]
    fn test_keyword_pattern_punctuation() {
        assert!(matches("C++", "C++ and C#"));
        assert!(matches("C#", "C++ and C#"));
        assert!(matches("Node.js", "(Node.js)"));
        assert!(!matches("Node.js", "Nodexjs"));
        assert!(matches("CI/CD", "Built CI/CD pipelines"));
    }

    #[test]
    fn test_keyword_pattern_ascii_word_characters() {
        // Accented letters are boundaries, digits and underscores are not.
        assert!(matches("Python", "Pythonés"));
        assert!(matches("SQL", "éSQL"));
        assert!(!matches("SQL", "SQL2"));
        assert!(!matches("SQL", "my_SQL"));
    }

    #[test]
    fn test_excessive_spacing() {
        assert!(EXCESSIVE_SPACING.is_match("Name    Title"));
        assert!(!EXCESSIVE_SPACING.is_match("Name   Title"));
    }
}
