//! pip-update CLI
//!
//! Lists outdated pip packages and upgrades them after confirmation.
//!
//! Usage:
//!   pip-update                 # confirm, then upgrade everything outdated
//!   pip-update -n -e           # only not-required packages, eagerly
//!   pip-update -y              # skip the confirmation prompt
//!   pip-update -3.12           # Windows: drive Python 3.12's pip
//!   pip-update -0              # Windows: list installed runtimes

use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Parser};

use cmd_common::{init_tracing, ProcessRunner};
use pip_update::versions::parse_version_selector;
use pip_update::{
    confirm_upgrade, outdated_packages, upgrade_packages, Pip, StdinReader, UpdateConfig,
    UpdateError,
};

#[derive(Parser)]
#[command(name = "pip-update")]
#[command(about = "Update all outdated Python packages")]
struct Cli {
    /// Python version to update packages for, in launcher syntax (e.g.
    /// -3.12). Pass -0 to list installed runtimes. Windows only; ignored
    /// elsewhere.
    #[arg(value_parser = parse_version_selector, allow_hyphen_values = true)]
    version: Option<String>,

    /// Only upgrade packages that are not required by other packages
    #[arg(short = 'n', long)]
    not_required: bool,

    /// Eagerly upgrade dependent packages. Only widens the set when
    /// --not-required is also given.
    #[arg(short = 'e', long)]
    eager: bool,

    /// Don't ask for confirmation prior to upgrading packages
    #[arg(short = 'y', long)]
    yes: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> UpdateConfig {
        UpdateConfig {
            version: self.version,
            not_required: self.not_required,
            eager: self.eager,
            assume_yes: self.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_config();
    let runner = Arc::new(ProcessRunner::new());

    if config.version.is_some() && !cfg!(windows) {
        tracing::warn!("Python version selection needs the Windows launcher; ignoring it here");
    }

    let pip = Pip::new(runner, config.version.clone());

    if config.lists_runtimes() {
        if cfg!(windows) {
            pip.list_runtimes().await?;
        } else {
            println!("Listing runtimes requires the Windows Python launcher.");
        }
        return Ok(());
    }

    let outdated = outdated_packages(&pip, config.not_required).await?;
    if outdated.is_empty() {
        println!("All packages are up to date.");
        return Ok(());
    }

    let mut reader = StdinReader;
    let proceed = confirm_upgrade(
        &outdated,
        config.eager_warning(),
        config.assume_yes,
        &mut reader,
    )
    .map_err(UpdateError::Prompt)?;

    if proceed {
        upgrade_packages(&pip, &outdated, config.eager).await?;
    } else {
        println!("Upgrade cancelled");
    }

    Ok(())
}
