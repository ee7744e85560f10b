// Command-line overrides applied on top of the saved preferences

use clap::{Parser, ValueEnum};

use crate::xtm_game::Mode;

/// xtmines - a 5x5 mines minigame with rigged rounds
#[derive(Parser, Debug)]
#[command(name = "xtmines")]
#[command(about = "A terminal 5x5 mines minigame with forced-win and forced-lose rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of clicks per round (1-5)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub clicks: Option<u8>,

    /// Preselect the round mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed the board generator for reproducible layouts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Language for this run ("en" or "zh")
    #[arg(long)]
    pub lang: Option<String>,
}

/// Round mode as typed on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Win,
    Lose,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Win => Mode::Win,
            ModeArg::Lose => Mode::Lose,
        }
    }
}
