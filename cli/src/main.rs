use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use costar_cli::config::{Args, Settings};
use costar_cli::state::Session;
use costar_cli::{load, repl};

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::try_from(Args::parse())?;
    let graph = load::load(&settings.sources)?;
    let mut session = Session::new(graph, &settings.center)
        .with_context(|| format!("initial center '{}' is not in the network", settings.center))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut session, &settings, stdin.lock(), stdout.lock())
}
