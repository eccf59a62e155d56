//! Catalog command - show the keyword and section catalogs in effect.

use clap::{Args, Subcommand};
use console::style;

use ats_core::models::catalog::TECHNICAL_SKILLS;
use ats_core::AtsConfig;

use super::load_config;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Print as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List industries with their keyword counts (default)
    Industries,

    /// List the keywords of one industry
    Keywords {
        /// Industry name (e.g., "finance")
        industry: String,
    },

    /// List section detectors and the critical sections
    Sections,
}

pub async fn run(args: CatalogArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    match args.command.unwrap_or(CatalogCommand::Industries) {
        CatalogCommand::Industries => show_industries(&config, args.json),
        CatalogCommand::Keywords { industry } => show_keywords(&config, &industry, args.json),
        CatalogCommand::Sections => show_sections(&config, args.json),
    }
}

fn show_industries(config: &AtsConfig, json: bool) -> anyhow::Result<()> {
    let industries = &config.keywords.industries;

    if json {
        let counts: serde_json::Map<String, serde_json::Value> = industries
            .iter()
            .map(|i| (i.name.clone(), i.keywords.len().into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    for (i, industry) in industries.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        println!(
            "{:<12} {:>4} keywords{}",
            industry.name,
            industry.keywords.len(),
            marker
        );
    }
    Ok(())
}

fn show_keywords(config: &AtsConfig, name: &str, json: bool) -> anyhow::Result<()> {
    let industry = config.keywords.industry(name).ok_or_else(|| {
        let known: Vec<&str> = config
            .keywords
            .industries
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        anyhow::anyhow!("Unknown industry: {} (known: {})", name, known.join(", "))
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&industry.keywords)?);
    } else {
        for keyword in &industry.keywords {
            println!("{}", keyword);
        }
    }
    Ok(())
}

fn show_sections(config: &AtsConfig, json: bool) -> anyhow::Result<()> {
    let sections = &config.sections;

    if json {
        println!("{}", serde_json::to_string_pretty(sections)?);
        return Ok(());
    }

    for rule in &sections.rules {
        let critical = sections.critical.iter().any(|c| c == &rule.name);
        let name = if critical {
            style(format!("{:<22}", rule.name)).bold()
        } else {
            style(format!("{:<22}", rule.name))
        };
        println!("{} {}", name, rule.pattern);
    }
    println!("{:<22} {}", TECHNICAL_SKILLS, sections.technical_skills_pattern);
    println!();
    println!("Critical: {}", sections.critical.join(", "));
    Ok(())
}
