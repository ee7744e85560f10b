// Library root for the 5x5 mines minigame
// The binary wires these modules together; integration tests drive the session directly

pub mod xtm_cli;   // Command-line overrides
pub mod xtm_color; // Terminal color palette
pub mod xtm_game;  // Session controller, board and preferences
pub mod xtm_lang;  // Multi-language string resources
pub mod xtm_log;   // File-backed tracing setup
pub mod xtm_ui;    // Terminal UI rendering and event handling
