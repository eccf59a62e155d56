//! Data models: catalogs, configuration, analysis results and workflow payloads.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod workflow;
