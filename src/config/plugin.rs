use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Commit-analysis stage of the stock pipeline.
pub const COMMIT_ANALYZER_PLUGIN: &str = "@semantic-release/commit-analyzer";
/// Release-notes stage of the stock pipeline.
pub const RELEASE_NOTES_PLUGIN: &str =
    "@semantic-release/release-notes-generator";
/// Changelog file writer plugin.
pub const CHANGELOG_PLUGIN: &str = "@semantic-release/changelog";
/// Shell-command plugin running prepare/publish commands.
pub const EXEC_PLUGIN: &str = "@semantic-release/exec";
/// Git commit/tag plugin committing release assets.
pub const GIT_PLUGIN: &str = "@semantic-release/git";
/// GitHub release plugin uploading release assets.
pub const GITHUB_PLUGIN: &str = "@semantic-release/github";
/// npm publish stage of the stock pipeline.
pub const NPM_PLUGIN: &str = "@semantic-release/npm";

/// Option key naming the changelog output file.
pub const CHANGELOG_FILE_OPTION: &str = "changelogFile";
/// Option key listing release assets for the git and github plugins.
pub const ASSETS_OPTION: &str = "assets";
/// Suffix shared by shell-command option keys (`prepareCmd`, `publishCmd`,
/// `verifyConditionsCmd`, ...).
pub const COMMAND_OPTION_SUFFIX: &str = "Cmd";

/// Plugin options are opaque key/value mappings owned by the external
/// plugin; key order is preserved for faithful round-trips.
pub type PluginOptions = serde_json::Map<String, Value>;

/// Pipeline step specification that accepts either a bare plugin identifier
/// or an `[identifier, options]` pair. Allows users to list plugins with
/// default options in a concise way while still supporting per-plugin
/// options when needed.
///
/// # Examples
///
/// Bare identifier (default options):
/// ```json
/// "plugins": ["@semantic-release/commit-analyzer"]
/// ```
///
/// Identifier with options:
/// ```json
/// "plugins": [["@semantic-release/changelog", { "changelogFile": "docs/changelog.md" }]]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PluginSpec {
    /// Bare plugin identifier - uses the plugin's default options
    Name(String),
    /// Plugin identifier paired with an options object
    WithOptions(String, PluginOptions),
}

impl PluginSpec {
    /// Plugin identifier regardless of spec shape.
    pub fn name(&self) -> &str {
        match self {
            PluginSpec::Name(name) => name,
            PluginSpec::WithOptions(name, _) => name,
        }
    }

    /// Converts the spec into a normalized [`Plugin`]. Bare identifiers get
    /// an empty options map.
    pub fn into_plugin(self) -> Plugin {
        match self {
            PluginSpec::Name(name) => Plugin {
                name,
                options: PluginOptions::new(),
            },
            PluginSpec::WithOptions(name, options) => Plugin { name, options },
        }
    }
}

/// Normalized pipeline step after resolution. This is the internal
/// representation after conversion from [`PluginSpec`].
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Plugin {
    /// Plugin identifier as invoked by the external runner
    pub name: String,
    /// Opaque plugin options in declared order
    pub options: PluginOptions,
}

impl Plugin {
    /// Returns the option value for `key` when present and a string.
    pub fn opt_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    /// Iterates shell-command options: every string-valued option whose key
    /// ends in `Cmd`, in declared order.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().filter_map(|(key, value)| {
            if key.ends_with(COMMAND_OPTION_SUFFIX) {
                value.as_str().map(|cmd| (key.as_str(), cmd))
            } else {
                None
            }
        })
    }
}
