use crate::cli::Cli;
use clap::Parser;
use html2md_filter::{filter, HtmdConverter};
use std::io;

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {} = Cli::parse();

    let converter = HtmdConverter::new();
    filter::run(io::stdin().lock(), io::stdout().lock(), &converter)
        .inspect_err(|err| log::debug!("Filter run failed: {err:?}"))?;

    Ok(())
}
