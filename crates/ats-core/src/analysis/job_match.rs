//! Illustrative job listings derived from the overall score.
//!
//! These are not search results. Each tier shifts the overall score into a
//! lower band and adds bounded jitter from the supplied random source.

use rand::Rng;

use crate::models::analysis::JobMatch;
use crate::models::catalog::Industry;

/// One seniority level of synthesized listing.
struct Tier {
    technology_title: &'static str,
    /// Prefix and suffix around the industry name for other industries.
    industry_title: (&'static str, &'static str),
    offset: i64,
    /// Half-open jitter range added after the offset.
    jitter: (i64, i64),
    band: (i64, i64),
    requirements: usize,
    companies: &'static [&'static str],
    locations: &'static [&'static str],
}

const TIERS: [Tier; 4] = [
    Tier {
        technology_title: "Senior Software Developer",
        industry_title: ("Senior ", " Specialist"),
        offset: 0,
        jitter: (-5, 5),
        band: (45, 95),
        requirements: 6,
        companies: &["Google", "Microsoft", "Amazon", "Apple", "Meta"],
        locations: &["Remote", "San Francisco, CA", "Seattle, WA", "New York, NY"],
    },
    Tier {
        technology_title: "Full Stack Engineer",
        industry_title: ("", " Manager"),
        offset: -8,
        jitter: (0, 8),
        band: (40, 90),
        requirements: 5,
        companies: &["Netflix", "Spotify", "Uber", "Airbnb", "Tesla"],
        locations: &["Remote", "Austin, TX", "Boston, MA", "Los Angeles, CA"],
    },
    Tier {
        technology_title: "Lead Frontend Developer",
        industry_title: ("Lead ", " Analyst"),
        offset: -15,
        jitter: (0, 10),
        band: (35, 85),
        requirements: 4,
        companies: &["Salesforce", "Adobe", "Oracle", "IBM", "Intel"],
        locations: &["Remote", "Chicago, IL", "Denver, CO", "Atlanta, GA"],
    },
    Tier {
        technology_title: "DevOps Engineer",
        industry_title: ("", " Coordinator"),
        offset: -20,
        jitter: (0, 12),
        band: (30, 80),
        requirements: 3,
        companies: &["GitHub", "Atlassian", "Slack", "Zoom", "Dropbox"],
        locations: &["Remote", "Portland, OR", "Miami, FL", "Phoenix, AZ"],
    },
];

/// Number of listings produced per analysis.
pub const JOB_MATCH_COUNT: usize = TIERS.len();

/// Builds the four tiered job matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobMatchSynthesizer;

impl JobMatchSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// `found` is the found-keyword list in discovery order; each tier takes
    /// a prefix of it as requirements.
    pub fn synthesize<R: Rng>(
        &self,
        overall_score: u32,
        industry: &Industry,
        found: &[String],
        rng: &mut R,
    ) -> Vec<JobMatch> {
        let technology = industry.name.eq_ignore_ascii_case("technology");
        let display_name = industry.display_name();

        TIERS
            .iter()
            .map(|tier| {
                let title = if technology {
                    tier.technology_title.to_string()
                } else {
                    format!("{}{}{}", tier.industry_title.0, display_name, tier.industry_title.1)
                };

                let raw = overall_score as i64 + tier.offset + rng.gen_range(tier.jitter.0..tier.jitter.1);
                let match_percent = raw.clamp(tier.band.0, tier.band.1) as u32;

                JobMatch {
                    title,
                    match_percent,
                    company: pick(tier.companies, rng),
                    location: pick(tier.locations, rng),
                    requirements: found.iter().take(tier.requirements).cloned().collect(),
                }
            })
            .collect()
    }
}

fn pick<R: Rng>(options: &[&str], rng: &mut R) -> String {
    options[rng.gen_range(0..options.len())].to_string()
}
