use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::Path;
use vellum_core::SitePipeline;

use crate::config::CliConfig;

pub fn make_subcommand() -> Command {
    Command::new("build")
        .about("Build the static site from markdown posts")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .help("Source directory containing markdown posts")
                .default_value("./posts"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for the generated site")
                .default_value("./public"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./vellum.toml"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = CliConfig::resolve(args)?;
    let output_dir = Path::new(&config.build.output);

    let posts = SitePipeline::new()
        .source_dir(Path::new(&config.build.source))
        .output_dir(output_dir)
        .site_config(config.site)
        .build()?;

    for post in &posts {
        println!("- {}", post.output_filename());
    }
    println!("Site built successfully in {}", output_dir.display());

    Ok(())
}
