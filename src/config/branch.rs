use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Release-branch specification that accepts either a bare branch name or a
/// structured descriptor. Allows users to declare stable channels in a
/// concise way while still supporting prerelease channels when needed.
///
/// # Examples
///
/// Bare name (stable channel):
/// ```json
/// "branches": ["main"]
/// ```
///
/// Structured descriptor (prerelease channel):
/// ```json
/// "branches": ["main", { "name": "develop", "prerelease": "rc" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum BranchSpec {
    /// Bare branch name releasing on the stable channel
    Name(String),
    /// Full descriptor with optional prerelease configuration
    Full(BranchConfig),
}

/// Structured branch descriptor. This is the explicit form of a branch entry;
/// bare names are equivalent to a descriptor with no prerelease setting.
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BranchConfig {
    /// Branch name in the repository
    pub name: String,
    /// Prerelease setting: absent for stable, `true` to derive the label
    /// from the branch name, or an explicit label string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<Prerelease>,
}

/// Prerelease setting for a branch descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Prerelease {
    /// `true` marks the branch as a prerelease channel labeled after the
    /// branch name; `false` is equivalent to omitting the field
    Enabled(bool),
    /// Explicit prerelease label appended to versions on this channel
    Label(String),
}

/// Release channel a branch publishes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReleaseChannel {
    /// Stable releases with no prerelease identifier
    Stable,
    /// Prerelease channel; `label` becomes the version prerelease identifier
    Prerelease { label: String },
}

/// Normalized branch after resolution. This is the internal representation
/// after conversion from [`BranchSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Branch {
    /// Branch name in the repository
    pub name: String,
    /// Release channel this branch publishes to
    pub channel: ReleaseChannel,
}

impl BranchSpec {
    /// Branch name regardless of spec shape.
    pub fn name(&self) -> &str {
        match self {
            BranchSpec::Name(name) => name,
            BranchSpec::Full(config) => &config.name,
        }
    }

    /// Converts the spec into a normalized [`Branch`].
    ///
    /// Bare names and descriptors without a prerelease setting map to the
    /// stable channel. `prerelease = true` derives the channel label from
    /// the branch name; an explicit label is used as-is.
    pub fn into_branch(self) -> Branch {
        match self {
            BranchSpec::Name(name) => Branch {
                name,
                channel: ReleaseChannel::Stable,
            },
            BranchSpec::Full(config) => {
                let channel = match config.prerelease {
                    None | Some(Prerelease::Enabled(false)) => {
                        ReleaseChannel::Stable
                    }
                    Some(Prerelease::Enabled(true)) => {
                        ReleaseChannel::Prerelease {
                            label: config.name.clone(),
                        }
                    }
                    Some(Prerelease::Label(label)) => {
                        ReleaseChannel::Prerelease { label }
                    }
                };

                Branch {
                    name: config.name,
                    channel,
                }
            }
        }
    }
}

impl Branch {
    /// True when this branch publishes prereleases.
    pub fn is_prerelease(&self) -> bool {
        matches!(self.channel, ReleaseChannel::Prerelease { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_bare_name_format() {
        let json = r#"["release", "main"]"#;

        let specs: Vec<BranchSpec> = serde_json::from_str(json).unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name(), "release");

        let branch = specs[0].clone().into_branch();
        assert_eq!(branch.name, "release");
        assert_eq!(branch.channel, ReleaseChannel::Stable);
        assert!(!branch.is_prerelease());
    }

    #[test]
    fn deserializes_descriptor_with_label() {
        let json = r#"[{ "name": "develop", "prerelease": "rc" }]"#;

        let specs: Vec<BranchSpec> = serde_json::from_str(json).unwrap();
        let branch = specs[0].clone().into_branch();

        assert_eq!(branch.name, "develop");
        assert_eq!(
            branch.channel,
            ReleaseChannel::Prerelease { label: "rc".into() }
        );
        assert!(branch.is_prerelease());
    }

    #[test]
    fn deserializes_mixed_format() {
        let json = r#"["release", { "name": "develop", "prerelease": "rc" }]"#;

        let specs: Vec<BranchSpec> = serde_json::from_str(json).unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].clone().into_branch().channel, ReleaseChannel::Stable);
        assert!(specs[1].clone().into_branch().is_prerelease());
    }

    #[test]
    fn boolean_prerelease_derives_label_from_name() {
        let json = r#"{ "name": "beta", "prerelease": true }"#;

        let spec: BranchSpec = serde_json::from_str(json).unwrap();
        let branch = spec.into_branch();

        assert_eq!(
            branch.channel,
            ReleaseChannel::Prerelease {
                label: "beta".into()
            }
        );
    }

    #[test]
    fn false_prerelease_stays_stable() {
        let json = r#"{ "name": "main", "prerelease": false }"#;

        let spec: BranchSpec = serde_json::from_str(json).unwrap();
        let branch = spec.into_branch();

        assert_eq!(branch.channel, ReleaseChannel::Stable);
    }
}
