//! Command line arguments.

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;

/// Generate the React Native style module from extracted Tailwind values
#[derive(Parser, Debug)]
#[command(name = "stylegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the extracted values. Reads stdin when omitted or `-`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Target platform, may be repeated. One module is generated per platform
    #[arg(short, long = "platform")]
    pub platforms: Vec<String>,

    /// Directory to write `styles[.<platform>].js` into. Prints to stdout when omitted
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// JSON config file with formatter and serializer options
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tool named in the header comment, overrides the config file
    #[arg(long)]
    pub tool_name: Option<String>,

    /// Module to require `StyleSheet` from, overrides the config file
    #[arg(long)]
    pub ui_framework: Option<String>,

    /// Emit the styles block without `StyleSheet.create(...)`
    #[arg(long)]
    pub no_stylesheet_create: bool,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Cli {
    /// Input path, `None` meaning stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
