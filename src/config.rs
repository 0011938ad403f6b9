//! Typed model of declarative release-pipeline configuration.
//!
//! Mirrors the configuration contract consumed by semantic-release style
//! runners: a repository URL, ordered release branches, a tag format
//! template, and an ordered plugin pipeline with per-plugin options.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{branch::BranchSpec, plugin::PluginSpec};

pub mod asset;
pub mod branch;
pub mod plugin;
pub mod resolver;

/// Default tag format applied when `tagFormat` is omitted.
pub const DEFAULT_TAG_FORMAT: &str = "v${version}";

/// Default release branches applied when `branches` is omitted.
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];

/// Default plugin pipeline applied when `plugins` is omitted.
pub const DEFAULT_PLUGINS: [&str; 4] = [
    plugin::COMMIT_ANALYZER_PLUGIN,
    plugin::RELEASE_NOTES_PLUGIN,
    plugin::NPM_PLUGIN,
    plugin::GITHUB_PLUGIN,
];

/// Root configuration structure.
///
/// Field names follow the camelCase keys of the runner's file format, so
/// `repository_url` reads and writes as `repositoryUrl`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Source-hosting location release metadata is published against.
    pub repository_url: Option<String>,
    /// Ordered release-branch descriptors; each maps to a release channel.
    pub branches: Vec<BranchSpec>,
    /// Tag naming template; must reference `${version}` exactly once.
    pub tag_format: String,
    /// Ordered plugin pipeline. Order determines the runner's execution
    /// order and is preserved through parsing and resolution.
    pub plugins: Vec<PluginSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository_url: None,
            branches: DEFAULT_BRANCHES
                .iter()
                .map(|name| BranchSpec::Name((*name).to_string()))
                .collect(),
            tag_format: DEFAULT_TAG_FORMAT.to_string(),
            plugins: DEFAULT_PLUGINS
                .iter()
                .map(|name| PluginSpec::Name((*name).to_string()))
                .collect(),
        }
    }
}
