use anyhow::Result;
use clap::Parser;
use std::io::Write;

use stylegen_cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter_level(cli.verbose.log_level_filter())
        .target(env_logger::fmt::Target::Stderr)
        .init();

    run(&cli)
}
