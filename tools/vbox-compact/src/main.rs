//! vbox-compact CLI
//!
//! Compacts every VirtualBox VDI disk image and reports the results.
//!
//! Usage:
//!   vbox-compact
//!   vbox-compact -vv          # debug logging
//!   VBOXMANAGE=/opt/VirtualBox/VBoxManage vbox-compact

use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Parser};

use cmd_common::{init_tracing, ProcessRunner};
use vbox_compact::{compact_all, CompactConfig, VboxManage};

#[derive(Parser)]
#[command(name = "vbox-compact")]
#[command(about = "Compact all VirtualBox VDI disk images and report results")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CompactConfig::from_env()?;
    tracing::info!(
        manager = %config.manager.display(),
        vm_root = %config.vm_root.display(),
        "starting compaction run"
    );

    let runner = Arc::new(ProcessRunner::new());
    let manager = VboxManage::new(runner, config.manager.clone());

    let summary = compact_all(&manager, &config).await?;

    println!(
        "\nDone: {} compacted, {} skipped, {} failed",
        summary.compacted.len(),
        summary.skipped.len(),
        summary.failed.len()
    );

    if !summary.failed.is_empty() {
        for (location, err) in &summary.failed {
            eprintln!("FAILED {}: {}", location.display(), err);
        }
        anyhow::bail!("{} disk(s) failed to compact", summary.failed.len());
    }

    Ok(())
}
