// Core game logic and configuration management
// Handles board generation, the session controller with its outcome forcing, and preference persistence

use derive_more::{Display, Error, From};
use directories::ProjectDirs;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Board geometry and tag counts
pub const ROWS: usize = 5;
pub const COLS: usize = 5;
pub const TILE_COUNT: usize = ROWS * COLS;
pub const MINE_COUNT: usize = 5;
pub const SAFE_COUNT: usize = TILE_COUNT - MINE_COUNT;

/// Allowed range for the click limit
pub const MIN_CLICKS: u8 = 1;
pub const MAX_CLICKS: u8 = 5;

/// True designation of a tile, independent of whether it is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Safe,
    Mine,
}

/// Rigged outcome applied to every round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Win,  // every click reveals safe
    Lose, // the last allowed click reveals a mine
}

impl Mode {
    /// Outcome a click must show, given its 1-based index and the round's click limit
    pub fn intended(self, click: u8, limit: u8) -> Tag {
        match self {
            Mode::Win => Tag::Safe,
            Mode::Lose if click == limit => Tag::Mine,
            Mode::Lose => Tag::Safe,
        }
    }
}

/// What the presentation layer shows for one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileView {
    Hidden,
    Safe,
    Mine,
}

impl From<Tag> for TileView {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Safe => TileView::Safe,
            Tag::Mine => TileView::Mine,
        }
    }
}

/// How the last finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Cleared,  // every click was safe
    Exploded, // a click revealed a mine
}

/// Inbound events from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    ModeSelected(Mode),
    RoundStartRequested,
    ClickLimitChanged(u8),
    TileClicked { row: usize, col: usize },
}

/// Outbound rendering updates for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Tile {
        row: usize,
        col: usize,
        view: TileView,
        interactive: bool,
    },
    Controls {
        start_enabled: bool,
    },
}

/// Effects produced by a single input
/// `reveal` is the end-of-round sequence, meant to be applied one step at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    pub reveal: Vec<Effect>,
}

impl Outcome {
    fn with(effect: Effect) -> Self {
        Outcome {
            effects: vec![effect],
            reveal: Vec::new(),
        }
    }

    /// True when the input was ignored
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.reveal.is_empty()
    }
}

/// The 5x5 grid: one tag and one revealed flag per tile, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tags: [Tag; TILE_COUNT],
    revealed: [bool; TILE_COUNT],
}

impl Board {
    /// Tag 20 tiles safe and 5 mine, then shuffle the tags over the positions
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tags = [Tag::Safe; TILE_COUNT];
        for tag in tags.iter_mut().skip(SAFE_COUNT) {
            *tag = Tag::Mine;
        }
        tags.shuffle(rng);
        Board {
            tags,
            revealed: [false; TILE_COUNT],
        }
    }

    /// Convert (row, col) to flat index, None when off the board
    pub fn index(row: usize, col: usize) -> Option<usize> {
        (row < ROWS && col < COLS).then_some(row * COLS + col)
    }

    /// Convert flat index back to (row, col)
    pub fn position(index: usize) -> (usize, usize) {
        (index / COLS, index % COLS)
    }

    pub fn tag(&self, row: usize, col: usize) -> Option<Tag> {
        Board::index(row, col).map(|i| self.tags[i])
    }

    pub fn is_revealed(&self, row: usize, col: usize) -> bool {
        Board::index(row, col).is_some_and(|i| self.revealed[i])
    }

    /// Visible state of a tile: its tag once revealed, hidden otherwise
    pub fn view(&self, row: usize, col: usize) -> TileView {
        match Board::index(row, col) {
            Some(i) if self.revealed[i] => self.tags[i].into(),
            _ => TileView::Hidden,
        }
    }

    /// Number of tiles carrying `tag`
    pub fn count(&self, tag: Tag) -> usize {
        self.tags.iter().filter(|t| **t == tag).count()
    }

    /// Make the tile at `index` carry `intended` by swapping with the first hidden tile that has it
    /// Returns the swap partner, or None when the tile already matched
    fn enforce(&mut self, index: usize, intended: Tag) -> Option<usize> {
        if self.tags[index] == intended {
            return None;
        }
        // revealed tiles keep their tag so nothing already shown changes underneath
        let partner = (0..TILE_COUNT).find(|i| !self.revealed[*i] && self.tags[*i] == intended)?;
        self.tags.swap(index, partner);
        Some(partner)
    }

    fn reveal(&mut self, index: usize) -> Tag {
        self.revealed[index] = true;
        self.tags[index]
    }

    /// Non-interactive updates for every still-hidden tile, in position order
    fn remaining_reveals(&self) -> Vec<Effect> {
        (0..TILE_COUNT)
            .filter(|i| !self.revealed[*i])
            .map(|i| {
                let (row, col) = Board::position(i);
                Effect::Tile {
                    row,
                    col,
                    view: self.tags[i].into(),
                    interactive: false,
                }
            })
            .collect()
    }
}

/// One round: the board plus the click limit it was started with
/// The mode is read live at each click, so a switch mid-round steers the clicks that follow
#[derive(Debug, Clone)]
struct Round {
    board: Board,
    limit: u8,
    clicks: u8,
    active: bool,
}

/// Game session controller
/// Owns the board and the outcome forcing; the UI only feeds it inputs and applies its effects
pub struct Session {
    mode: Option<Mode>,
    click_limit: u8,
    round: Option<Round>,
    last_result: Option<RoundResult>,
    rng: StdRng,
}

impl Session {
    /// Create an idle session; a seed makes board layouts reproducible
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Session {
            mode: None,
            click_limit: MIN_CLICKS,
            round: None,
            last_result: None,
            rng,
        }
    }

    /// Dispatch an inbound event to the matching operation
    pub fn handle(&mut self, input: Input) -> Outcome {
        match input {
            Input::ModeSelected(mode) => self.set_mode(mode),
            Input::RoundStartRequested => self.start_round(),
            Input::ClickLimitChanged(n) => self.set_click_limit(n),
            Input::TileClicked { row, col } => self.click(row, col),
        }
    }

    /// Select the rigged outcome; always enables the start control
    /// Inside a running round it applies from the next click on
    pub fn set_mode(&mut self, mode: Mode) -> Outcome {
        if self.mode != Some(mode) {
            info!(?mode, active = self.is_active(), "mode selected");
        }
        self.mode = Some(mode);
        Outcome::with(Effect::Controls {
            start_enabled: true,
        })
    }

    /// Store the click limit for the next round, clamped to 1..=5
    pub fn set_click_limit(&mut self, n: u8) -> Outcome {
        self.click_limit = n.clamp(MIN_CLICKS, MAX_CLICKS);
        debug!(limit = self.click_limit, "click limit changed");
        Outcome::default()
    }

    /// Deal a fresh board and open a round
    /// Ignored without a mode; a running round is abandoned and replaced
    pub fn start_round(&mut self) -> Outcome {
        let Some(mode) = self.mode else {
            return Outcome::default();
        };
        if self.is_active() {
            info!(clicks = self.clicks(), "round abandoned");
        }
        let board = Board::generate(&mut self.rng);
        let mut effects: Vec<Effect> = (0..TILE_COUNT)
            .map(|i| {
                let (row, col) = Board::position(i);
                Effect::Tile {
                    row,
                    col,
                    view: TileView::Hidden,
                    interactive: true,
                }
            })
            .collect();
        effects.push(Effect::Controls {
            start_enabled: false,
        });
        info!(?mode, limit = self.click_limit, "round started");
        self.round = Some(Round {
            board,
            limit: self.click_limit,
            clicks: 0,
            active: true,
        });
        Outcome {
            effects,
            reveal: Vec::new(),
        }
    }

    /// Click a tile: force the current mode's intended outcome onto it, reveal it, and end the round when due
    /// Clicks outside an active round, beyond the limit, off the board or on revealed tiles are ignored
    pub fn click(&mut self, row: usize, col: usize) -> Outcome {
        let Some(mode) = self.mode else {
            return Outcome::default();
        };
        let Some(round) = self.round.as_mut() else {
            return Outcome::default();
        };
        if !round.active || round.clicks >= round.limit {
            return Outcome::default();
        }
        let Some(index) = Board::index(row, col) else {
            return Outcome::default();
        };
        if round.board.revealed[index] {
            return Outcome::default();
        }

        round.clicks += 1;
        let intended = mode.intended(round.clicks, round.limit);
        if let Some(partner) = round.board.enforce(index, intended) {
            debug!(index, partner, ?intended, "tags swapped");
        }
        let tag = round.board.reveal(index);

        let mut outcome = Outcome::with(Effect::Tile {
            row,
            col,
            view: tag.into(),
            interactive: false,
        });

        // Only forced-lose rounds can end before the limit
        let exploded = mode == Mode::Lose && tag == Tag::Mine;
        if round.clicks == round.limit || exploded {
            round.active = false;
            let result = if tag == Tag::Mine {
                RoundResult::Exploded
            } else {
                RoundResult::Cleared
            };
            info!(clicks = round.clicks, ?result, "round ended");
            outcome.effects.push(Effect::Controls {
                start_enabled: true,
            });
            outcome.reveal = round.board.remaining_reveals();
            self.last_result = Some(result);
        }
        outcome
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Click limit that the next round will use
    pub fn click_limit(&self) -> u8 {
        self.click_limit
    }

    /// Clicks used in the current or last round
    pub fn clicks(&self) -> u8 {
        self.round.as_ref().map_or(0, |r| r.clicks)
    }

    /// Click limit of the current or last round
    pub fn round_limit(&self) -> Option<u8> {
        self.round.as_ref().map(|r| r.limit)
    }

    pub fn is_active(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.active)
    }

    /// Whether a start request would be honored
    pub fn can_start(&self) -> bool {
        self.mode.is_some()
    }

    /// Clicks used and the limit they count against, for the status line
    /// Reports the current or last round, or zero against the next round's limit before any round
    pub fn click_progress(&self) -> (u8, u8) {
        match self.round.as_ref() {
            Some(r) => (r.clicks, r.limit),
            None => (0, self.click_limit),
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.round.as_ref().map(|r| &r.board)
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }
}

/// Preference file errors
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("preference file I/O failed: {source}")]
    Io { source: std::io::Error },
    #[display("preference file is not valid TOML: {source}")]
    Parse { source: toml::de::Error },
    #[display("preferences could not be serialized: {source}")]
    Serialize { source: toml::ser::Error },
}

/// User preferences
/// Persisted to disk as TOML; game state is never stored here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,         // Language code ("en" or "zh")
    pub ascii_icons: bool,        // Use ASCII fallback glyphs for tiles
    pub show_indicator: bool,     // Highlight the tile under the keyboard cursor
    pub reveal_delay_ms: u64,     // Stagger between end-of-round reveals
    pub default_click_limit: u8,  // Click limit selected at startup
}

impl Default for Config {
    fn default() -> Self {
        // Auto-detect system language on first run
        let system_lang = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
        let language = if system_lang.to_lowercase().starts_with("zh") {
            "zh".to_string()
        } else {
            "en".to_string()
        };

        Config {
            language,
            ascii_icons: false,
            show_indicator: true,
            reveal_delay_ms: 50,
            default_click_limit: MIN_CLICKS,
        }
    }
}

impl Config {
    /// Startup click limit, clamped into the allowed range
    pub fn click_limit(&self) -> u8 {
        self.default_click_limit.clamp(MIN_CLICKS, MAX_CLICKS)
    }
}

/// Get the configuration file path
/// Uses the platform config directory (e.g., ~/.config/xtmines/xtmines.toml on Linux)
/// Falls back to the current directory if ProjectDirs is unavailable
pub fn config_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "xhbl", "xtmines") {
        return Some(proj.config_dir().join("xtmines.toml"));
    }
    env::current_dir().ok().map(|dir| dir.join("xtmines.toml"))
}

/// Read preferences from a TOML file
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    Ok(toml::from_str(&s)?)
}

/// Write preferences to a TOML file, creating parent directories
pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    let s = toml::to_string(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, s)?;
    Ok(())
}

/// Load preferences from disk, or create the default file if not found
/// A broken file is reported and replaced by defaults for this run only
pub fn load_or_create_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if path.exists() {
        match load_config_from(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default preferences");
                return Config::default();
            }
        }
    }
    let cfg = Config::default();
    if let Err(e) = save_config_to(&path, &cfg) {
        warn!(path = %path.display(), error = %e, "could not create preference file");
    }
    cfg
}

/// Save preferences to the default location
pub fn save_config(cfg: &Config) {
    if let Some(path) = config_path() {
        match save_config_to(&path, cfg) {
            Ok(()) => info!(path = %path.display(), "preferences saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not save preferences"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_mines(mines: [usize; MINE_COUNT]) -> Board {
        let mut tags = [Tag::Safe; TILE_COUNT];
        for i in mines {
            tags[i] = Tag::Mine;
        }
        Board {
            tags,
            revealed: [false; TILE_COUNT],
        }
    }

    #[test]
    fn enforce_leaves_matching_tile_alone() {
        let mut board = board_with_mines([0, 1, 2, 3, 4]);
        let before = board.clone();
        assert_eq!(board.enforce(10, Tag::Safe), None);
        assert_eq!(board, before);
    }

    #[test]
    fn enforce_swaps_with_first_tile_of_intended_tag() {
        let mut board = board_with_mines([0, 6, 12, 18, 24]);
        // first safe tile is index 1
        assert_eq!(board.enforce(12, Tag::Safe), Some(1));
        assert_eq!(board.tags[12], Tag::Safe);
        assert_eq!(board.tags[1], Tag::Mine);
        assert_eq!(board.count(Tag::Mine), MINE_COUNT);

        // first mine tile is index 0
        assert_eq!(board.enforce(20, Tag::Mine), Some(0));
        assert_eq!(board.tags[20], Tag::Mine);
        assert_eq!(board.tags[0], Tag::Safe);
        assert_eq!(board.count(Tag::Safe), SAFE_COUNT);
    }

    #[test]
    fn enforce_never_takes_a_revealed_tile() {
        let mut board = board_with_mines([20, 21, 22, 23, 24]);
        board.reveal(0);
        board.reveal(1);
        assert_eq!(board.enforce(20, Tag::Safe), Some(2));
        assert_eq!(board.tags[0], Tag::Safe);
        assert_eq!(board.tags[1], Tag::Safe);
        assert_eq!(board.tags[2], Tag::Mine);
    }

    #[test]
    fn remaining_reveals_skip_revealed_tiles() {
        let mut board = board_with_mines([20, 21, 22, 23, 24]);
        board.reveal(0);
        board.reveal(7);
        let reveals = board.remaining_reveals();
        assert_eq!(reveals.len(), TILE_COUNT - 2);
        assert_eq!(
            reveals[0],
            Effect::Tile { row: 0, col: 1, view: TileView::Safe, interactive: false }
        );
        assert_eq!(
            reveals.last(),
            Some(&Effect::Tile { row: 4, col: 4, view: TileView::Mine, interactive: false })
        );
    }

    #[test]
    fn index_and_position_agree() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(2, 3), Some(13));
        assert_eq!(Board::index(5, 0), None);
        assert_eq!(Board::index(0, 5), None);
        assert_eq!(Board::position(13), (2, 3));
        assert_eq!(Board::position(24), (4, 4));
    }

    #[test]
    fn intended_outcome_per_mode() {
        assert_eq!(Mode::Win.intended(5, 5), Tag::Safe);
        assert_eq!(Mode::Lose.intended(1, 3), Tag::Safe);
        assert_eq!(Mode::Lose.intended(3, 3), Tag::Mine);
        assert_eq!(Mode::Lose.intended(1, 1), Tag::Mine);
    }
}
