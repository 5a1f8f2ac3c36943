use anyhow::{Result, bail};

use crate::cli::{Cli, Command};
use crate::commands::{self, CommandOutput};
use crate::config::Config;
use crate::store;

/// Load the save file, run one command, and write the league back if it changed.
pub async fn run(cli: Cli, config: &Config) -> Result<CommandOutput> {
    if let Command::Init { force } = cli.command {
        return init(config, force).await;
    }

    let mut registry = store::load(&config.data_file).await?;
    let mut rng = config.rng();

    let output = commands::execute(cli.command, &mut registry, &mut rng)?;

    if output.changed {
        store::save(&config.data_file, &registry).await?;
    }

    Ok(output)
}

async fn init(config: &Config, force: bool) -> Result<CommandOutput> {
    if store::exists(&config.data_file).await? && !force {
        bail!(
            "{} already exists, pass --force to replace it",
            config.data_file.display()
        );
    }

    store::save(&config.data_file, &league::LeagueRegistry::new()).await?;

    Ok(CommandOutput {
        lines: vec![format!(
            "Created empty league at {}",
            config.data_file.display()
        )],
        changed: true,
    })
}
