use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crashout_blog::config::{CFG_FILE_NAME, SAMPLE_CONFIG};

use crate::ConfigArgs;

fn default_config_path() -> Result<PathBuf> {
    let cfg_dir = dirs::config_dir().ok_or_else(|| anyhow!("Could not find user config dir"))?;
    Ok(cfg_dir.join(CFG_FILE_NAME))
}

pub fn config_cmd(args: ConfigArgs) -> Result<()> {
    let path = match args.out_file {
        Some(path) => path,
        None => default_config_path()?,
    };

    if path.exists() && !args.force {
        bail!("{} already exists. Use --force to overwrite it", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Error creating {}", parent.display()))?;
    }

    println!("Writing sample config to {}", path.display());
    fs::write(&path, SAMPLE_CONFIG)
        .with_context(|| format!("Error writing {}", path.display()))?;

    Ok(())
}
