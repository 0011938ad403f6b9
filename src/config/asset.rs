use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Release asset specification that accepts either a string path or a full
/// descriptor. Allows users to list assets in a concise way while still
/// supporting display labels when needed.
///
/// # Examples
///
/// Simple path or glob:
/// ```json
/// "assets": ["docs/changelog.md", "dist/*.whl"]
/// ```
///
/// Full descriptor with a label:
/// ```json
/// "assets": [{ "path": "dist/*.tar.gz", "label": "Source distribution" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AssetSpec {
    /// Simple path string or glob
    Path(String),
    /// Full descriptor with an optional display label
    Full(Asset),
}

/// Release asset descriptor. This is the internal representation after
/// conversion from [`AssetSpec`].
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Asset {
    /// Path or glob identifying files, relative to the repository root
    pub path: String,
    /// Optional display name used when the asset is uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AssetSpec {
    /// Converts the spec into an [`Asset`]. Path variants get no label.
    pub fn into_asset(self) -> Asset {
        match self {
            AssetSpec::Path(path) => Asset { path, label: None },
            AssetSpec::Full(asset) => asset,
        }
    }
}
