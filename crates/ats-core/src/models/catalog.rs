//! Keyword and section catalogs.
//!
//! Both catalogs are plain data: they are built once (from the defaults below
//! or from a configuration file) and handed to the analyzer, which compiles
//! them into matchers. Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

/// Industry name → ordered keyword list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCatalog {
    /// Industries in priority order. The first one is the fallback industry.
    pub industries: Vec<Industry>,
}

/// A single industry's keyword list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    /// Industry name (e.g., "technology").
    pub name: String,

    /// Keywords in canonical casing. Matching is case-insensitive.
    pub keywords: Vec<String>,
}

impl Industry {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Industry name with the first letter upper-cased ("finance" → "Finance").
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl KeywordCatalog {
    /// Look up an industry by name (case-insensitive).
    pub fn industry(&self, name: &str) -> Option<&Industry> {
        self.industries
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// All keywords of all industries, in catalog order.
    ///
    /// A keyword listed by more than one industry (compared case-insensitively)
    /// appears once, at its first position.
    pub fn merged_keywords(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.industries
            .iter()
            .flat_map(|i| i.keywords.iter())
            .filter(|k| seen.insert(k.to_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// Total number of keywords across industries (before de-duplication).
    pub fn len(&self) -> usize {
        self.industries.iter().map(|i| i.keywords.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self {
            industries: vec![
                Industry::new("technology", TECHNOLOGY_KEYWORDS),
                Industry::new("marketing", MARKETING_KEYWORDS),
                Industry::new("finance", FINANCE_KEYWORDS),
                Industry::new("healthcare", HEALTHCARE_KEYWORDS),
            ],
        }
    }
}

/// Résumé section rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCatalog {
    /// Section detectors, in report order.
    pub rules: Vec<SectionRule>,

    /// Sections every résumé is expected to have.
    pub critical: Vec<String>,

    /// Extra detector that adds "Technical Skills" when it matches.
    pub technical_skills_pattern: String,
}

/// A canonical section name and the pattern that signals it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRule {
    pub name: String,
    /// Regular expression, matched case-insensitively against the whole text.
    pub pattern: String,
}

/// Name of the section added by the technical-skills detector.
pub const TECHNICAL_SKILLS: &str = "Technical Skills";

impl SectionRule {
    fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self {
            rules: vec![
                SectionRule::new("Contact Information", r"contact|phone|email|address|linkedin"),
                SectionRule::new("Professional Summary", r"summary|objective|profile|about"),
                SectionRule::new(
                    "Work Experience",
                    r"experience|employment|work|career|professional",
                ),
                SectionRule::new("Education", r"education|degree|university|college|academic"),
                SectionRule::new("Skills", r"skills|technical|competencies|technologies|tools"),
                SectionRule::new("Projects", r"projects|portfolio|work samples"),
                SectionRule::new("Certifications", r"certifications|licenses|credentials"),
                SectionRule::new("Achievements", r"achievements|awards|accomplishments"),
            ],
            critical: [
                "Contact Information",
                "Professional Summary",
                "Work Experience",
                "Education",
                "Skills",
                TECHNICAL_SKILLS,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            technical_skills_pattern: r"technical\s+skills|technologies|programming|languages"
                .to_string(),
        }
    }
}

const TECHNOLOGY_KEYWORDS: &[&str] = &[
    // Programming languages
    "JavaScript", "JS", "Python", "Java", "C++", "C#", "TypeScript", "TS", "PHP", "Ruby", "Go",
    "Rust", "Swift", "Kotlin", "HTML", "CSS", "HTML5", "CSS3", "SCSS", "SASS", "Less",
    // Frameworks and libraries
    "React", "ReactJS", "React.js", "Angular", "AngularJS", "Vue", "Vue.js", "VueJS", "Node.js",
    "NodeJS", "Express", "Express.js", "Django", "Flask", "Spring", "Laravel", "jQuery",
    "Bootstrap", "Tailwind", "TailwindCSS", "Material-UI", "Ant Design",
    // Databases
    "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle", "NoSQL", "Database",
    "DBMS", "Mongoose", "Sequelize", "Prisma",
    // Cloud and DevOps
    "AWS", "Azure", "GCP", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "CI/CD", "DevOps",
    "Terraform", "Ansible", "Nginx", "Apache", "Linux", "Ubuntu",
    // Tools
    "Git", "GitHub", "GitLab", "Bitbucket", "SVN", "Jira", "Confluence", "VS Code",
    "Visual Studio", "IntelliJ", "Eclipse", "PyCharm", "Sublime Text", "Webpack", "Vite",
    "Parcel", "Gulp", "Grunt", "NPM", "Yarn", "Pip",
    // Methodologies
    "Agile", "Scrum", "Kanban", "Waterfall", "TDD", "BDD", "Unit Testing",
    "Integration Testing", "API Testing", "Jest", "Mocha", "Cypress",
    // Concepts
    "REST API", "RESTful", "GraphQL", "Microservices", "Serverless", "Machine Learning", "ML",
    "AI", "Artificial Intelligence", "Data Science", "Big Data", "Analytics", "ETL",
    "Data Pipeline", "Data Warehouse", "OOP", "Object-Oriented Programming",
    "Functional Programming", "Data Structures", "Algorithms", "DSA", "System Design",
];

const MARKETING_KEYWORDS: &[&str] = &[
    "SEO", "SEM", "Google Analytics", "Google Ads", "Facebook Ads", "Social Media",
    "Content Marketing", "Email Marketing", "PPC", "Pay-Per-Click", "CPC", "CPM",
    "Brand Management", "Campaign Management", "Lead Generation", "Conversion Optimization",
    "A/B Testing", "Marketing Automation", "CRM", "Salesforce", "HubSpot", "Digital Marketing",
    "Inbound Marketing", "Outbound Marketing", "Growth Hacking",
];

const FINANCE_KEYWORDS: &[&str] = &[
    "Financial Analysis", "Excel", "Financial Modeling", "Risk Management", "Investment",
    "Portfolio Management", "Accounting", "GAAP", "IFRS", "Budgeting", "Forecasting",
    "Compliance", "Audit", "Tax", "Valuation", "Bloomberg", "Reuters", "QuickBooks", "SAP",
    "Oracle Financials",
];

const HEALTHCARE_KEYWORDS: &[&str] = &[
    "Patient Care", "Medical Records", "HIPAA", "Clinical", "Healthcare", "Medical", "Nursing",
    "Treatment", "Diagnosis", "EHR", "EMR", "Electronic Health Records", "Quality Assurance",
    "Regulatory Compliance", "FDA", "Clinical Trials", "Medical Devices", "Pharmaceuticals",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_industry_order() {
        let catalog = KeywordCatalog::default();
        let names: Vec<&str> = catalog.industries.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["technology", "marketing", "finance", "healthcare"]);
    }

    #[test]
    fn test_merged_keywords_dedup_case_insensitive() {
        let catalog = KeywordCatalog {
            industries: vec![
                Industry::new("a", &["Excel", "SQL"]),
                Industry::new("b", &["excel", "Tax"]),
            ],
        };
        assert_eq!(catalog.merged_keywords(), vec!["Excel", "SQL", "Tax"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_industry_lookup_and_display_name() {
        let catalog = KeywordCatalog::default();
        let finance = catalog.industry("Finance").unwrap();
        assert_eq!(finance.display_name(), "Finance");
        assert!(catalog.industry("law").is_none());
    }

    #[test]
    fn test_default_sections_cover_critical_names() {
        let sections = SectionCatalog::default();
        assert_eq!(sections.rules.len(), 8);
        assert_eq!(sections.critical.len(), 6);
        assert!(sections.critical.iter().any(|c| c == TECHNICAL_SKILLS));
    }

    #[test]
    fn test_catalog_roundtrips_through_json() {
        let catalog = KeywordCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: KeywordCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
