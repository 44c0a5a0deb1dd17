use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crashout_blog::content::{table_of_contents, ContentFormatter, TocEntry};

use crate::{FormatArgs, TocArgs};

pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Error reading stdin"),
    }
}

pub(crate) fn toc_lines(toc: &[TocEntry]) -> Vec<String> {
    toc.iter()
        .map(|entry| format!("{}\t{}\t{}", entry.level, entry.id, entry.text))
        .collect()
}

pub fn format_cmd(args: FormatArgs) -> Result<()> {
    let content = read_input(args.file.as_deref())?;
    let formatter = ContentFormatter::new(args.escape_html);
    println!("{}", formatter.format(&content));
    Ok(())
}

pub fn toc_cmd(args: TocArgs) -> Result<()> {
    let content = read_input(args.file.as_deref())?;
    for line in toc_lines(&table_of_contents(&content)) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_lines() {
        let toc = table_of_contents("## What is a Value Bet?\n### Why?\n#### Skipped");
        assert_eq!(toc_lines(&toc), ["2\twhat-is-a-value-bet\tWhat is a Value Bet?", "3\twhy\tWhy?"]);
    }
}
