//! Keyword alignment between a résumé and a job description.

use std::collections::HashSet;

use super::scoring::round2;
use super::KeywordIndexer;
use crate::models::analysis::{JobAlignment, KeywordOccurrenceIndex};

/// Compare the catalog keywords of a job description with those found in the
/// résumé. Returns `None` for a blank description.
pub fn align(
    indexer: &KeywordIndexer,
    job_description: &str,
    resume: &KeywordOccurrenceIndex,
) -> Option<JobAlignment> {
    if job_description.trim().is_empty() {
        return None;
    }

    let have: HashSet<&str> = resume.keywords().collect();
    let requested: Vec<String> = indexer
        .index(job_description)
        .keywords()
        .map(str::to_string)
        .collect();

    let (matched, missing): (Vec<String>, Vec<String>) = requested
        .iter()
        .cloned()
        .partition(|k| have.contains(k.as_str()));

    let coverage = if requested.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / requested.len() as f64 * 100.0)
    };

    Some(JobAlignment {
        requested,
        matched,
        missing,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::KeywordCatalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alignment_partitions_requested_keywords() {
        let indexer = KeywordIndexer::new(&KeywordCatalog::default()).unwrap();
        let resume = indexer.index("Python, Docker and SQL");
        let jd = "We need Python, Kubernetes and Docker experience";

        let alignment = align(&indexer, jd, &resume).unwrap();
        assert_eq!(alignment.requested, vec!["Python", "Docker", "Kubernetes"]);
        assert_eq!(alignment.matched, vec!["Python", "Docker"]);
        assert_eq!(alignment.missing, vec!["Kubernetes"]);
        assert_eq!(alignment.coverage, 66.67);
    }

    #[test]
    fn test_blank_description_is_none() {
        let indexer = KeywordIndexer::new(&KeywordCatalog::default()).unwrap();
        let resume = indexer.index("Python");
        assert!(align(&indexer, "   \n", &resume).is_none());
    }

    #[test]
    fn test_description_without_catalog_keywords() {
        let indexer = KeywordIndexer::new(&KeywordCatalog::default()).unwrap();
        let resume = indexer.index("Python");
        let alignment = align(&indexer, "friendly team player", &resume).unwrap();
        assert!(alignment.requested.is_empty());
        assert_eq!(alignment.coverage, 0.0);
    }
}
