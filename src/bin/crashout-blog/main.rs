use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use crashout_blog::config::Config;
use crashout_blog::logger::configure_logger;
use crashout_blog::page::SiteRenderer;
use crashout_blog::server::server_run;
use crashout_blog::source::PostSource;

use crate::config::open_config;

mod config;

/// Serves the CrashOut blog list and posts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. Defaults to crashout.toml next to the binary, in the current dir or the user config dir
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Load the configuration, the templates and the post source, then exit
    #[arg(long)]
    check: bool,
}

fn check_setup(config: &Config) -> Result<()> {
    let source = PostSource::from_config(config).context("Invalid post source")?;
    SiteRenderer::from_config(config).context("Invalid templates")?;
    println!("Templates: {}", config.paths.template_dir.display());
    println!("Public files: {}", config.paths.public_dir.display());
    println!("Posts: {}", source.describe());
    println!("Configuration is valid");
    Ok(())
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = open_config(args.config_path).map_err(|err| {
        anyhow::anyhow!("{}\nRun crashout-blog --help, or blog-tool config to write a sample configuration", err)
    })?;

    if args.check {
        return check_setup(&config);
    }

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Starting CrashOut blog v{}", env!("CARGO_PKG_VERSION"));

    server_run(config).await.context("Blog server stopped")?;
    Ok(())
}
