//! Industry classification by keyword overlap.

use std::collections::HashSet;

use crate::error::{AtsError, Result};
use crate::models::analysis::KeywordOccurrenceIndex;
use crate::models::catalog::{Industry, KeywordCatalog};

/// Picks the industry whose keyword list overlaps most with the found keywords.
#[derive(Debug, Clone)]
pub struct IndustryClassifier {
    /// Never empty.
    industries: Vec<Industry>,
}

impl IndustryClassifier {
    pub fn new(catalog: &KeywordCatalog) -> Result<Self> {
        if catalog.industries.is_empty() {
            return Err(AtsError::Config(
                "keyword catalog must define at least one industry".to_string(),
            ));
        }
        Ok(Self {
            industries: catalog.industries.clone(),
        })
    }

    /// Select exactly one industry.
    ///
    /// Only a strictly greater count replaces the current pick, so ties and
    /// the all-zero case go to the earliest industry in the catalog.
    pub fn classify(&self, found: &KeywordOccurrenceIndex) -> &Industry {
        let found: HashSet<String> = found.keywords().map(str::to_lowercase).collect();

        let mut best = 0;
        let mut best_count = 0;
        for (i, industry) in self.industries.iter().enumerate() {
            let count = overlap(industry, &found);
            if count > best_count {
                best = i;
                best_count = count;
            }
        }

        &self.industries[best]
    }

    /// Keywords of an industry that were not found, in catalog order.
    pub fn missing_keywords(industry: &Industry, found: &KeywordOccurrenceIndex) -> Vec<String> {
        let found: HashSet<String> = found.keywords().map(str::to_lowercase).collect();
        industry
            .keywords
            .iter()
            .filter(|k| !found.contains(&k.to_lowercase()))
            .cloned()
            .collect()
    }
}

fn overlap(industry: &Industry, found: &HashSet<String>) -> usize {
    industry
        .keywords
        .iter()
        .filter(|k| found.contains(&k.to_lowercase()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::KeywordIndexer;
    use pretty_assertions::assert_eq;

    fn classify(text: &str) -> String {
        let catalog = KeywordCatalog::default();
        let index = KeywordIndexer::new(&catalog).unwrap().index(text);
        IndustryClassifier::new(&catalog)
            .unwrap()
            .classify(&index)
            .name
            .clone()
    }

    #[test]
    fn test_highest_overlap_wins() {
        assert_eq!(classify("SEO, SEM, Google Ads, HubSpot and Python"), "marketing");
        assert_eq!(classify("HIPAA, EHR, Patient Care, Nursing"), "healthcare");
    }

    #[test]
    fn test_no_matches_falls_back_to_first_industry() {
        assert_eq!(classify("nothing relevant here"), "technology");
    }

    #[test]
    fn test_tie_goes_to_earlier_industry() {
        // one technology keyword, one finance keyword
        assert_eq!(classify("Python and Excel"), "technology");
    }

    #[test]
    fn test_missing_keywords_complement_found() {
        let catalog = KeywordCatalog::default();
        let index = KeywordIndexer::new(&catalog)
            .unwrap()
            .index("Excel, GAAP, Audit, Tax");
        let finance = catalog.industry("finance").unwrap();

        let missing = IndustryClassifier::missing_keywords(finance, &index);
        assert_eq!(missing.len(), finance.keywords.len() - 4);
        assert!(!missing.iter().any(|k| k == "GAAP"));
        assert_eq!(missing[0], "Financial Analysis");
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let err = IndustryClassifier::new(&KeywordCatalog { industries: vec![] }).unwrap_err();
        assert!(matches!(err, AtsError::Config(_)));
    }
}
