use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use mailly::app::App;
use mailly::config::{load_config, load_config_from};
use mailly::domain::address::AddressGenerator;
use mailly::snow::Snowfall;
use mailly::store::memory::MemoryStore;
use mailly::terminal::run_tui;

#[derive(Parser)]
#[command(name = "mailly")]
#[command(about = "Holiday disposable mailboxes in your terminal", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for mailbox addresses and snow layout
    #[arg(long)]
    seed: Option<u64>,

    /// Turn off the falling snow
    #[arg(long)]
    no_snow: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    info!(
        "mailboxes on @{} with {}-char local parts",
        cfg.domain(),
        cfg.local_part_len()
    );

    let addresses = AddressGenerator::new(cfg.domain(), cfg.local_part_len(), cli.seed);
    let mut app = App::new(MemoryStore::new(addresses));

    let flakes = if cli.no_snow { 0 } else { cfg.snowflakes() };
    let snow = Snowfall::new(flakes, cli.seed);

    run_tui(&mut app, &snow, cfg.tick())
}
