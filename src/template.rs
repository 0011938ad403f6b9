//! Placeholder handling for tag format templates and plugin commands.
//!
//! Templates use `${...}` references. The external runner substitutes them
//! at release time; this module only lists references for validation and
//! renders previews for a hypothetical next version. Commands are never
//! executed here.
use regex::Regex;
use semver::Version;

use crate::error::Result;

/// Pattern matching `${...}` references in template strings.
pub const REFERENCE_PATTERN: &str = r"\$\{\s*([^{}]+?)\s*\}";

/// Reference substituted with the release version in tag formats.
pub const VERSION_REFERENCE: &str = "version";

/// Reference substituted with the release version in plugin commands.
pub const NEXT_VERSION_REFERENCE: &str = "nextRelease.version";

/// Lists every `${...}` reference in a template string, in order.
pub fn references(input: &str) -> Result<Vec<String>> {
    let matcher = Regex::new(REFERENCE_PATTERN)?;

    Ok(matcher
        .captures_iter(input)
        .map(|caps| caps[1].to_string())
        .collect())
}

/// Renders a tag format for the given release version.
pub fn render_tag(tag_format: &str, version: &Version) -> Result<String> {
    substitute(tag_format, VERSION_REFERENCE, &version.to_string())
}

/// Renders a plugin command for the given release version. References other
/// than the version reference are left untouched for the external runner.
pub fn render_command(command: &str, version: &Version) -> Result<String> {
    substitute(command, NEXT_VERSION_REFERENCE, &version.to_string())
}

fn substitute(input: &str, reference: &str, value: &str) -> Result<String> {
    let matcher = Regex::new(REFERENCE_PATTERN)?;

    let rendered = matcher.replace_all(input, |caps: &regex::Captures| {
        if &caps[1] == reference {
            value.to_string()
        } else {
            caps[0].to_string()
        }
    });

    Ok(rendered.into_owned())
}
