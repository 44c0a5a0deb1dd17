use anyhow::{anyhow, bail, Context, Result};

use crashout_blog::config::{find_config_path, read_config};
use crashout_blog::content::RenderedContent;
use crashout_blog::content::ContentFormatter;
use crashout_blog::page::PageState;
use crashout_blog::source::PostSource;

use crate::format::toc_lines;
use crate::FetchArgs;

pub async fn fetch_cmd(args: FetchArgs) -> Result<()> {
    let config_path = args.config_path
        .or_else(find_config_path)
        .ok_or_else(|| anyhow!("Could not find crashout.toml configuration"))?;
    let config = read_config(&config_path)
        .with_context(|| format!("Error reading {}", config_path.display()))?;

    let source = PostSource::from_config(&config)?;
    eprintln!("Fetching {} from {}", args.slug, source.describe());

    let post = match PageState::from(source.get_post(&args.slug).await) {
        PageState::Loaded(post) => post,
        PageState::NotFound => bail!("Blog post not found: {}", args.slug),
        PageState::Failed(message) => bail!("Could not load blog post: {}", message),
    };

    let formatter = ContentFormatter::new(config.defaults.escape_html);
    let rendered = RenderedContent::render(&formatter, &post.content);

    if args.toc {
        for line in toc_lines(&rendered.toc) {
            println!("{}", line);
        }
        println!();
    }
    println!("{}", rendered.html);

    Ok(())
}
