//! Keyword occurrence indexing.

use regex::{RegexSet, RegexSetBuilder};
use tracing::trace;

use super::patterns::keyword_pattern;
use crate::error::{AtsError, Result};
use crate::models::analysis::{KeywordLocation, KeywordOccurrenceIndex};
use crate::models::catalog::KeywordCatalog;

/// Compiled-size ceiling for the combined keyword matcher. Leaves room for
/// user catalogs several times larger than the default one.
const MATCHER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Finds every line on which each catalog keyword occurs.
///
/// All industries are merged into one combined matcher, so each line is
/// scanned once regardless of catalog size.
#[derive(Debug, Clone)]
pub struct KeywordIndexer {
    keywords: Vec<String>,
    matcher: RegexSet,
}

impl KeywordIndexer {
    /// Compile the merged keyword list of a catalog.
    pub fn new(catalog: &KeywordCatalog) -> Result<Self> {
        let keywords: Vec<String> = catalog
            .merged_keywords()
            .into_iter()
            .map(str::to_string)
            .collect();
        let matcher = RegexSetBuilder::new(keywords.iter().map(|k| keyword_pattern(k)))
            .size_limit(MATCHER_SIZE_LIMIT)
            .build()
            .map_err(|e| AtsError::Config(format!("keyword catalog: {}", e)))?;

        Ok(Self { keywords, matcher })
    }

    /// Number of distinct keywords being matched.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Index a text line by line. Keys follow catalog order.
    pub fn index(&self, text: &str) -> KeywordOccurrenceIndex {
        let mut hits: Vec<Vec<KeywordLocation>> = vec![Vec::new(); self.keywords.len()];

        for (i, line) in text.split('\n').enumerate() {
            for k in self.matcher.matches(line).iter() {
                hits[k].push(KeywordLocation {
                    line: i + 1,
                    text: line.trim().to_string(),
                });
            }
        }

        let mut index = KeywordOccurrenceIndex::default();
        for (keyword, locations) in self.keywords.iter().zip(hits) {
            index.push(keyword, locations);
        }
        trace!("Indexed {} of {} keywords", index.len(), self.keywords.len());
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Industry;
    use pretty_assertions::assert_eq;

    fn indexer() -> KeywordIndexer {
        KeywordIndexer::new(&KeywordCatalog::default()).unwrap()
    }

    #[test]
    fn test_default_catalog_compiles() {
        let indexer = KeywordIndexer::new(&KeywordCatalog::default()).unwrap();
        assert_eq!(indexer.len(), KeywordCatalog::default().merged_keywords().len());
    }

    #[test]
    fn test_locations_are_line_numbered_and_trimmed() {
        let text = "Jane Doe\n  Skills: JavaScript, React  \nBuilt React dashboards";
        let index = indexer().index(text);

        let react: Vec<String> = index
            .get("React")
            .unwrap()
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(
            react,
            vec![
                "Line 2: Skills: JavaScript, React".to_string(),
                "Line 3: Built React dashboards".to_string(),
            ]
        );
    }

    #[test]
    fn test_consecutive_matching_lines_are_all_recorded() {
        let index = indexer().index("Python\nPython\nPython");
        assert_eq!(index.get("Python").map(|l| l.len()), Some(3));
    }

    #[test]
    fn test_no_partial_word_matches() {
        let index = indexer().index("JavaScript engineer");
        let found: Vec<&str> = index.keywords().collect();
        assert_eq!(found, vec!["JavaScript"]);
        assert!(index.get("Java").is_none());
    }

    #[test]
    fn test_case_insensitive_with_canonical_keys() {
        let index = indexer().index("worked with kubernetes and aws");
        let found: Vec<&str> = index.keywords().collect();
        assert_eq!(found, vec!["AWS", "Kubernetes"]);
    }

    #[test]
    fn test_keys_follow_catalog_order() {
        let catalog = KeywordCatalog {
            industries: vec![
                Industry::new("one", &["Zeta", "Alpha"]),
                Industry::new("two", &["Beta"]),
            ],
        };
        let index = KeywordIndexer::new(&catalog)
            .unwrap()
            .index("Beta\nAlpha\nZeta");
        assert_eq!(index.keywords().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Beta"]);
    }

    #[test]
    fn test_empty_catalog_finds_nothing() {
        let indexer = KeywordIndexer::new(&KeywordCatalog { industries: vec![] }).unwrap();
        assert!(indexer.is_empty());
        assert!(indexer.index("Rust everywhere").is_empty());
    }
}
