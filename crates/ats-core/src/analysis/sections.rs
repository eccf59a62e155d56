//! Résumé section detection.

use regex::{Regex, RegexBuilder};

use crate::error::{AtsError, Result};
use crate::models::catalog::{SectionCatalog, TECHNICAL_SKILLS};

/// Sections found in a text and the critical ones that are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedStructure {
    /// Distinct section names, in catalog order.
    pub sections: Vec<String>,
    pub missing_critical: Vec<String>,
    /// Size of the critical list the sections were measured against.
    pub critical_count: usize,
}

/// Compiled form of a [`SectionCatalog`].
#[derive(Debug, Clone)]
pub struct StructureDetector {
    rules: Vec<(String, Regex)>,
    technical_skills: Regex,
    critical: Vec<String>,
}

impl StructureDetector {
    /// Compile the catalog's patterns. Fails only on a malformed pattern.
    pub fn new(catalog: &SectionCatalog) -> Result<Self> {
        let rules = catalog
            .rules
            .iter()
            .map(|rule| Ok((rule.name.clone(), compile(&rule.name, &rule.pattern)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            technical_skills: compile(TECHNICAL_SKILLS, &catalog.technical_skills_pattern)?,
            critical: catalog.critical.clone(),
        })
    }

    /// Match every rule against the whole lowercased text.
    pub fn detect(&self, text: &str) -> DetectedStructure {
        let text = text.to_lowercase();
        let mut sections: Vec<String> = Vec::new();

        for (name, pattern) in &self.rules {
            if pattern.is_match(&text) && !sections.contains(name) {
                sections.push(name.clone());
            }
        }

        if self.technical_skills.is_match(&text) && !sections.iter().any(|s| s == TECHNICAL_SKILLS) {
            sections.push(TECHNICAL_SKILLS.to_string());
        }

        let missing_critical = self
            .critical
            .iter()
            .filter(|critical| !sections.iter().any(|found| names_overlap(found, critical)))
            .cloned()
            .collect();

        DetectedStructure {
            sections,
            missing_critical,
            critical_count: self.critical.len(),
        }
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| AtsError::Config(format!("invalid pattern for section '{}': {}", name, e)))
}

/// Either name contains the other, ignoring case.
fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
