//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, RenderStyle, Settings};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        return cmd_completion(*shell);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);
    execute_with(&container, cli)
}

/// Run `cli` against an already wired container.
pub fn execute_with(container: &ServiceContainer, cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => cmd_tree(container, None, None),
        Some(Commands::Tree { input, style }) => cmd_tree(container, input.as_deref(), *style),
        Some(Commands::Paths { input, separator }) => {
            cmd_paths(container, input.as_deref(), separator.as_deref())
        }
        Some(Commands::Config { command }) => cmd_config(container, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

/// A document without a usable root yields the placeholder, not a failure.
fn no_tree(container: &ServiceContainer, e: &ApplicationError) -> CliResult<()> {
    warn!("no key-path tree: {}", e);
    output::placeholder(&container.settings.placeholder);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tree(
    container: &ServiceContainer,
    input: Option<&Path>,
    style: Option<RenderStyle>,
) -> CliResult<()> {
    match container.keypath.tree(input, style) {
        Ok(result) => {
            debug!("tree: {} nodes", result.tree.len());
            output::data(&result.rendered)?;
            Ok(())
        }
        Err(e @ ApplicationError::Domain(_)) => no_tree(container, &e),
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(container))]
fn cmd_paths(
    container: &ServiceContainer,
    input: Option<&Path>,
    separator: Option<&str>,
) -> CliResult<()> {
    if separator == Some("") {
        return Err(CliError::InvalidArgs("--separator must not be empty".into()));
    }
    match container.keypath.paths(input, separator) {
        Ok(paths) => {
            let text = paths.iter().map(|path| format!("{path}\n")).join("");
            output::data(&text)?;
            Ok(())
        }
        Err(e @ ApplicationError::Domain(_)) => no_tree(container, &e),
        Err(e) => Err(e.into()),
    }
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::data(&container.settings.to_toml()?)?;
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                let state = if path.exists() { "exists" } else { "not found" };
                output::action("global", &format!("{} ({})", path.display(), state));
            }
            None => output::warning("no config directory for this platform"),
        },
        ConfigCommands::Template => {
            output::data(&Settings::template())?;
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
