//! Configuration resolver using builder pattern.
//!
//! Transforms a raw [`Config`] into a fully resolved [`ResolvedConfig`] by
//! applying defaults, normalizing branch/plugin/asset specifications, and
//! validating inputs.
//!
//! ## Validation rules
//!
//! - `repositoryUrl` must be set and parse as an http(s) repository URL
//! - branch names must be non-empty and unique; prerelease labels must be
//!   valid semver prerelease identifiers
//! - `tagFormat` must reference `${version}` exactly once
//! - plugin identifiers must be non-empty
//! - well-known plugin options (`changelogFile`, `*Cmd`, `assets`) must be
//!   structurally valid; all other options stay opaque

use derive_builder::Builder;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{
    config::{
        Config, DEFAULT_BRANCHES, DEFAULT_PLUGINS, DEFAULT_TAG_FORMAT,
        asset::AssetSpec,
        branch::{Branch, BranchSpec, ReleaseChannel},
        plugin::{
            ASSETS_OPTION, CHANGELOG_FILE_OPTION, CHANGELOG_PLUGIN,
            COMMAND_OPTION_SUFFIX, EXEC_PLUGIN, GIT_PLUGIN, GITHUB_PLUGIN,
            Plugin, PluginSpec,
        },
    },
    error::{RelcheckError, Result},
    template,
};

/// Fully resolved and validated configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Validated source-hosting location
    pub repository_url: String,
    /// Normalized branches with computed release channels
    pub branches: Vec<Branch>,
    /// Validated tag naming template
    pub tag_format: String,
    /// Normalized plugin pipeline in declared order
    pub plugins: Vec<Plugin>,
}

impl ResolvedConfig {
    /// Release channels in branch declaration order.
    pub fn channels(&self) -> Vec<&ReleaseChannel> {
        self.branches.iter().map(|branch| &branch.channel).collect()
    }

    /// Looks up the first pipeline step with the given plugin identifier.
    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.name == name)
    }
}

/// Resolves configuration by taking ownership and applying all resolution
/// logic.
#[derive(Builder)]
#[builder(setter(into))]
pub struct ConfigResolver {
    config: Config,
}

impl ConfigResolver {
    /// Resolves the configuration and returns the fully resolved
    /// [`ResolvedConfig`].
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let Config {
            repository_url,
            branches,
            tag_format,
            plugins,
        } = self.config.clone();

        let repository_url = Self::resolve_repository_url(repository_url)?;
        let branches = Self::resolve_branches(branches)?;
        let tag_format = Self::resolve_tag_format(tag_format)?;
        let plugins = Self::resolve_plugins(plugins)?;

        Ok(ResolvedConfig {
            repository_url,
            branches,
            tag_format,
            plugins,
        })
    }

    fn resolve_repository_url(url: Option<String>) -> Result<String> {
        let url = url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                RelcheckError::invalid_config("must set repositoryUrl")
            })?;

        let parsed = git_url_parse::GitUrl::parse(&url)?;

        Self::validate_scheme(parsed.scheme)?;

        Ok(url)
    }

    /// Validate repository URL uses HTTP or HTTPS scheme.
    fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
        match scheme {
            git_url_parse::Scheme::Http => Ok(()),
            git_url_parse::Scheme::Https => Ok(()),
            _ => Err(RelcheckError::invalid_config(
                "only http and https schemes are supported for repositoryUrl",
            )),
        }
    }

    fn resolve_branches(specs: Vec<BranchSpec>) -> Result<Vec<Branch>> {
        let specs = if specs.is_empty() {
            DEFAULT_BRANCHES
                .iter()
                .map(|name| BranchSpec::Name((*name).to_string()))
                .collect()
        } else {
            specs
        };

        let mut seen = HashSet::new();
        let mut branches = Vec::with_capacity(specs.len());

        for spec in specs {
            let branch = spec.into_branch();

            if branch.name.trim().is_empty() {
                return Err(RelcheckError::invalid_config(
                    "branch name must not be empty",
                ));
            }

            if !seen.insert(branch.name.clone()) {
                return Err(RelcheckError::invalid_config(format!(
                    "duplicate branch name '{}'",
                    branch.name
                )));
            }

            if let ReleaseChannel::Prerelease { label } = &branch.channel {
                semver::Prerelease::new(label).map_err(|e| {
                    RelcheckError::invalid_config(format!(
                        "invalid prerelease label '{}' for branch '{}': {}",
                        label, branch.name, e
                    ))
                })?;
            }

            branches.push(branch);
        }

        Ok(branches)
    }

    fn resolve_tag_format(tag_format: String) -> Result<String> {
        let tag_format = if tag_format.trim().is_empty() {
            DEFAULT_TAG_FORMAT.to_string()
        } else {
            tag_format
        };

        let references = template::references(&tag_format)?;

        if references.len() != 1
            || references[0] != template::VERSION_REFERENCE
        {
            return Err(RelcheckError::invalid_config(format!(
                "tagFormat '{}' must reference ${{version}} exactly once",
                tag_format
            )));
        }

        Ok(tag_format)
    }

    fn resolve_plugins(specs: Vec<PluginSpec>) -> Result<Vec<Plugin>> {
        let specs = if specs.is_empty() {
            DEFAULT_PLUGINS
                .iter()
                .map(|name| PluginSpec::Name((*name).to_string()))
                .collect()
        } else {
            specs
        };

        let mut plugins = Vec::with_capacity(specs.len());

        for spec in specs {
            let plugin = spec.into_plugin();

            if plugin.name.trim().is_empty() {
                return Err(RelcheckError::invalid_config(
                    "plugin identifier must not be empty",
                ));
            }

            Self::validate_plugin_options(&plugin)?;

            plugins.push(plugin);
        }

        Ok(plugins)
    }

    /// Structural checks for well-known plugin options. Unknown plugins and
    /// unknown options are opaque and pass through untouched.
    fn validate_plugin_options(plugin: &Plugin) -> Result<()> {
        match plugin.name.as_str() {
            CHANGELOG_PLUGIN => Self::validate_changelog_options(plugin),
            EXEC_PLUGIN => Self::validate_command_options(plugin),
            GIT_PLUGIN | GITHUB_PLUGIN => Self::validate_asset_options(plugin),
            _ => Ok(()),
        }
    }

    fn validate_changelog_options(plugin: &Plugin) -> Result<()> {
        let Some(value) = plugin.options.get(CHANGELOG_FILE_OPTION) else {
            return Ok(());
        };

        let path = value.as_str().ok_or_else(|| {
            RelcheckError::invalid_config(format!(
                "{} for plugin '{}' must be a string",
                CHANGELOG_FILE_OPTION, plugin.name
            ))
        })?;

        if path.trim().is_empty() {
            return Err(RelcheckError::invalid_config(format!(
                "{} for plugin '{}' must not be empty",
                CHANGELOG_FILE_OPTION, plugin.name
            )));
        }

        Ok(())
    }

    fn validate_command_options(plugin: &Plugin) -> Result<()> {
        for (key, value) in &plugin.options {
            if !key.ends_with(COMMAND_OPTION_SUFFIX) {
                continue;
            }

            let command = value.as_str().ok_or_else(|| {
                RelcheckError::invalid_config(format!(
                    "{} for plugin '{}' must be a string",
                    key, plugin.name
                ))
            })?;

            if command.trim().is_empty() {
                return Err(RelcheckError::invalid_config(format!(
                    "{} for plugin '{}' must not be empty",
                    key, plugin.name
                )));
            }
        }

        Ok(())
    }

    fn validate_asset_options(plugin: &Plugin) -> Result<()> {
        let Some(value) = plugin.options.get(ASSETS_OPTION) else {
            return Ok(());
        };

        let specs: Vec<AssetSpec> = serde_json::from_value(value.clone())
            .map_err(|e| {
                RelcheckError::invalid_config(format!(
                    "invalid {} entry for plugin '{}': {}",
                    ASSETS_OPTION, plugin.name, e
                ))
            })?;

        for spec in specs {
            let asset = spec.into_asset();

            if asset.path.trim().is_empty() {
                return Err(RelcheckError::invalid_config(format!(
                    "asset path for plugin '{}' must not be empty",
                    plugin.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
