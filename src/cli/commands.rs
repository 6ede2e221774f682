//! Command dispatch

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{IoResultExt, Script};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::IdManage;
use crate::render::TreeRender;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { script, json }) => _tree(cli, script, *json),
        Some(Commands::List { script, json }) => _list(cli, script, *json),
        Some(Commands::Config) => _config(cli),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

fn settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(start_id) = cli.start_id {
        settings.start_id = start_id;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Build a registry from the settings and replay the script file into it.
#[instrument(level = "debug", skip(cli))]
pub fn replay_file(cli: &Cli, path: &Path) -> CliResult<IdManage> {
    let content = fs::read_to_string(path).with_path_context("read script", path)?;
    let script = Script::parse(&content)?;
    let mut registry = settings(cli)?.registry();
    let report = script.replay(&mut registry)?;
    debug!("replay report: {:?}", report);

    for (line, id) in &report.missing {
        output::warning(&format!("line {}: no menu with id {}", line, id));
    }
    Ok(registry)
}

#[instrument(level = "debug", skip(cli))]
fn _tree(cli: &Cli, script: &Path, json: bool) -> CliResult<()> {
    let registry = replay_file(cli, script)?;
    let tree = registry.tree();
    if json {
        output::info(&serde_json::to_string_pretty(&tree)?);
    } else {
        output::info(&tree.to_tree_string());
    }
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _list(cli: &Cli, script: &Path, json: bool) -> CliResult<()> {
    let registry = replay_file(cli, script)?;
    if json {
        output::info(&serde_json::to_string_pretty(registry.storage())?);
        return Ok(());
    }
    output::header(&format!("{:<12} {:<12} {}", "ID", "PARENT", "NAME"));
    for menu in registry.storage() {
        output::info(&output::menu_row(menu));
    }
    Ok(())
}

fn _config(cli: &Cli) -> CliResult<()> {
    let settings = settings(cli)?;
    output::info(settings.to_toml()?.trim_end());
    Ok(())
}
