//! Prints the resolved release configuration as JSON.
use semver::Version;
use std::{fs, path::Path};

use crate::{
    cli::{Args, ShowArgs},
    command::common,
    config::resolver::ResolvedConfig,
    error::{RelcheckError, Result},
    template,
};

/// Prints the resolved configuration, optionally to a file. With
/// `--next-version`, the output also carries previews of the effective tag
/// and plugin commands for that version.
pub fn execute(args: &Args, cmd: ShowArgs) -> Result<()> {
    let resolved = common::resolve_config(args)?;

    let json = match cmd.next_version {
        Some(ref next_version) => {
            let version =
                Version::parse(next_version).map_err(|e| {
                    RelcheckError::InvalidArgs(format!(
                        "invalid --next-version '{}': {}",
                        next_version, e
                    ))
                })?;

            serde_json::json!({
                "config": resolved,
                "preview": preview(&resolved, &version)?,
            })
        }
        None => serde_json::json!(resolved),
    };

    print_json(json, cmd.out_file)
}

/// Renders the effective tag and every plugin command for a hypothetical
/// next release version. Rendering is preview-only; nothing is executed.
fn preview(
    resolved: &ResolvedConfig,
    version: &Version,
) -> Result<serde_json::Value> {
    let tag = template::render_tag(&resolved.tag_format, version)?;

    let mut commands = Vec::new();

    for plugin in &resolved.plugins {
        for (option, command) in plugin.commands() {
            commands.push(serde_json::json!({
                "plugin": plugin.name,
                "option": option,
                "command": template::render_command(command, version)?,
            }));
        }
    }

    Ok(serde_json::json!({ "tag": tag, "commands": commands }))
}

fn print_json(json: serde_json::Value, out_file: Option<String>) -> Result<()> {
    let contents = serde_json::to_string_pretty(&json)?;

    if let Some(out_file) = out_file {
        let file_path = Path::new(&out_file);

        if let Some(parent) = file_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(file_path, contents)?;
        log::info!("wrote resolved configuration to {}", out_file);
        return Ok(());
    }

    println!("{contents}");

    Ok(())
}
