//! Shared functionality used across commands.
use std::path::Path;

use crate::{
    cli::Args,
    config::{
        Config,
        resolver::{ConfigResolverBuilder, ResolvedConfig},
    },
    error::Result,
    loader,
};

/// Loads configuration honoring the `--config` override.
pub fn load_config(args: &Args) -> Result<Config> {
    if !args.config.is_empty() {
        return loader::load_file(Path::new(&args.config));
    }

    loader::load(Path::new(&args.dir))
}

/// Loads and fully resolves configuration for a command invocation.
pub fn resolve_config(args: &Args) -> Result<ResolvedConfig> {
    let config = load_config(args)?;

    let resolver = ConfigResolverBuilder::default().config(config).build()?;

    resolver.resolve()
}
