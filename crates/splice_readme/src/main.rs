// crates/splice_readme/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::info;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use splice_readme::splice_files;

// $ splice_readme source.cpp README.md > spliced-source.cpp
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("splice_readme")
        .version("0.1.0")
        .about("Replaces the README sentinel line in a source file with the README as quoted string literals")
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .help("Source file containing the sentinel line")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("readme")
                .value_name("README")
                .help("File whose lines are inlined in place of the sentinel")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .get_matches();

    let source = matches
        .get_one::<PathBuf>("source")
        .context("Missing SOURCE argument")?;
    let readme = matches
        .get_one::<PathBuf>("readme")
        .context("Missing README argument")?;

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let stats = splice_files(source, readme, out).with_context(|| {
        format!(
            "Failed to splice {} into {}",
            readme.display(),
            source.display()
        )
    })?;

    info!(
        "read {} source lines, replaced {} sentinel(s) with {} README lines",
        stats.source_lines,
        stats.sentinels,
        stats.content_lines
    );
    Ok(())
}
