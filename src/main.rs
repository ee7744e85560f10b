// Entry point for the mines minigame TUI
// Initializes logging, preferences, language settings, and launches the main UI

use clap::Parser;
use std::error::Error;

use xtmines::xtm_cli::Cli;
use xtmines::xtm_game::{Session, load_or_create_config};
use xtmines::xtm_lang::Lang;
use xtmines::xtm_log;
use xtmines::xtm_ui::run as run_ui;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    xtm_log::init();

    // Load or create user preferences
    let mut cfg = load_or_create_config();

    // Command-line language applies to this run only
    let mut lang = Lang::new(cli.lang.as_deref().unwrap_or(&cfg.language));

    let mut session = Session::new(cli.seed);
    session.set_click_limit(cli.clicks.unwrap_or_else(|| cfg.click_limit()));
    if let Some(mode) = cli.mode {
        session.set_mode(mode.into());
    }

    tracing::info!(seed = ?cli.seed, "starting xtmines");

    // Launch the main UI loop
    run_ui(&mut cfg, &mut lang, &mut session)
}
