use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::fetch::fetch_cmd;
use crate::format::{format_cmd, toc_cmd};
use crate::sample_config::config_cmd;

mod fetch;
mod format;
mod sample_config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Format a post body into an HTML fragment
    Format(FormatArgs),
    /// Print the table of contents of a post body
    Toc(TocArgs),
    /// Fetch a post from the configured source and print its formatted body
    Fetch(FetchArgs),
    /// Write a sample configuration file
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct FormatArgs {
    /// File with the post body. Reads stdin when missing
    file: Option<PathBuf>,

    /// Escape `&` and `<` before formatting
    #[arg(short, long)]
    escape_html: bool,
}

#[derive(Parser, Debug)]
struct TocArgs {
    /// File with the post body. Reads stdin when missing
    file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FetchArgs {
    /// Slug of the post
    slug: String,

    /// Config path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Print the table of contents before the body
    #[arg(short, long)]
    toc: bool,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Where to write the configuration. Defaults to the user config dir
    out_file: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args {
        Args::Format(args) => format_cmd(args),
        Args::Toc(args) => toc_cmd(args),
        Args::Fetch(args) => fetch_cmd(args).await,
        Args::Config(args) => config_cmd(args),
    }
}
