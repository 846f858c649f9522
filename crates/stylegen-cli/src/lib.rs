//! Command line front end for the style module generator.
//!
//! Reads the extractor's JSON output, formats one module per requested
//! platform and writes the results. All file handling lives here; the
//! formatter itself never touches the filesystem.

pub mod cli;
pub mod config;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use stylegen_codegen::{ExtractedValues, GeneratedModule, ObjectLiteralSerializer, OutputFormatter};

pub use cli::Cli;
pub use config::Config;

/// Generate modules for the arguments in `cli` and write them out.
pub fn run(cli: &Cli) -> Result<()> {
    let json = read_input(cli.input_path().map(PathBuf::as_path))?;
    let config = resolve_config(cli)?;

    let modules = generate(&json, &config, &cli.platforms)?;

    match &cli.out_dir {
        Some(dir) => {
            write_modules(dir, &modules)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            for module in &modules {
                stdout.write_all(module.content.as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Load the config file, if any, and apply the command line overrides.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(tool_name) = &cli.tool_name {
        config.formatter.tool_name = tool_name.clone();
    }
    if let Some(ui_framework) = &cli.ui_framework {
        config.formatter.ui_framework = ui_framework.clone();
    }
    if cli.no_stylesheet_create {
        config.serializer.stylesheet_create = false;
    }
    Ok(config)
}

/// Format extracted values given as JSON for each platform.
pub fn generate(json: &str, config: &Config, platforms: &[String]) -> Result<Vec<GeneratedModule>> {
    let values = ExtractedValues::from_json(json).context("Invalid extracted values")?;
    log::debug!(
        "{} styles, {} at-rules, {} masks, {} topics",
        values.styles.len(),
        values.at_rules.len(),
        values.masks.len(),
        values.topics.len()
    );

    let formatter = OutputFormatter::with_serializer(
        config.formatter.clone(),
        ObjectLiteralSerializer::with_config(config.serializer.clone()),
    )?;

    let platforms: Vec<&str> = platforms.iter().map(String::as_str).collect();
    Ok(formatter.format_all(&values, &platforms)?)
}

/// Write each module into `dir`, creating it if needed.
pub fn write_modules(dir: &Path, modules: &[GeneratedModule]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Could not create {}", dir.display()))?;

    let mut written = Vec::with_capacity(modules.len());
    for module in modules {
        let path = dir.join(module.file_name());
        fs::write(&path, &module.content)
            .with_context(|| format!("Could not write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        None => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("Could not read stdin")?;
            Ok(json)
        }
    }
}
