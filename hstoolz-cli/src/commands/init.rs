//! Create the asset folders without starting the server

use anyhow::{Context, Result};
use clap::Parser;
use hstoolz_core::AssetFolder;

use super::DataArgs;

#[derive(Parser, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run_init(args: InitArgs) -> Result<()> {
    let config = args.data.resolve()?;
    let layout = config.layout();
    layout
        .ensure_folders()
        .with_context(|| format!("failed to create asset folders in {}", layout.root().display()))?;

    for folder in AssetFolder::ALL {
        println!("{}", layout.folder_path(folder).display());
    }
    Ok(())
}
