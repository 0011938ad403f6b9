//! Validates the release configuration and reports a summary.
use crate::{
    cli::Args, command::common, config::branch::ReleaseChannel, error::Result,
};

/// Loads, resolves, and validates configuration. Any violation surfaces as
/// an error and a non-zero exit; a valid configuration logs a summary.
pub fn execute(args: &Args) -> Result<()> {
    let resolved = common::resolve_config(args)?;

    for branch in &resolved.branches {
        match &branch.channel {
            ReleaseChannel::Stable => {
                log::debug!("branch '{}' releases on the stable channel", branch.name)
            }
            ReleaseChannel::Prerelease { label } => log::debug!(
                "branch '{}' releases prereleases labeled '{}'",
                branch.name,
                label
            ),
        }
    }

    log::info!(
        "configuration is valid: {} release channel(s), {} pipeline step(s)",
        resolved.branches.len(),
        resolved.plugins.len()
    );

    Ok(())
}
