use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use clap::parser::ValueSource;
use config::{Config as Settings, Environment};
use serde::Deserialize;
use vellum_core::config::{Config, SiteConfig};

/// Where one build reads from and writes to, after every override layer
/// has been applied. Lowest to highest: built-in defaults, `VELLUM_*`
/// environment variables, command-line flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub source: String,
    pub output: String,
    pub config: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            source: "./posts".to_string(),
            output: "./public".to_string(),
            config: "./vellum.toml".to_string(),
        }
    }
}

/// Everything the build subcommand needs: the resolved directories plus
/// the site section of `vellum.toml`.
#[derive(Debug)]
pub struct CliConfig {
    pub build: BuildSettings,
    pub site: SiteConfig,
}

impl CliConfig {
    pub fn resolve(args: &ArgMatches) -> Result<Self> {
        let build = resolve_build_settings(args)?;
        let site = load_site_config(&build.config)?;

        Ok(Self { build, site })
    }
}

// Environment variables are named after the fields: VELLUM_SOURCE,
// VELLUM_OUTPUT, VELLUM_CONFIG. Clap's baked-in defaults are filtered
// out so they cannot shadow the environment; missing fields fall back
// to BuildSettings::default() during deserialization.
fn resolve_build_settings(args: &ArgMatches) -> Result<BuildSettings> {
    let mut settings =
        Settings::builder().add_source(Environment::with_prefix("VELLUM").prefix_separator("_"));

    for field in ["source", "output", "config"] {
        if let Some(value) = flag_value(args, field) {
            settings = settings.set_override(field, value.as_str())?;
        }
    }

    Ok(settings.build()?.try_deserialize()?)
}

// Only flags the user actually typed count as overrides.
fn flag_value<'a>(args: &'a ArgMatches, id: &str) -> Option<&'a String> {
    match args.value_source(id)? {
        ValueSource::CommandLine => args.get_one::<String>(id),
        _ => None,
    }
}

// The site section is optional at every level: no file and no [site]
// table both mean the built-in defaults. A file that exists but cannot
// be read or parsed is fatal.
fn load_site_config(path: &str) -> Result<SiteConfig> {
    if !Path::new(path).exists() {
        return Ok(SiteConfig::default());
    }

    let config = Config::read(path)?;
    Ok(config.site.unwrap_or_default())
}
