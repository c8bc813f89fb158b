use std::env;

use anyhow::Context as _;
use portfolio_scaffold::scaffold;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cwd = env::current_dir().context("failed to get current dir")?;
    let (report, message) = scaffold(cwd)?;

    log::debug!("{report}");
    println!("{message}");

    Ok(())
}
