// File-backed logging so trace output never draws over the terminal UI

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. "xtmines=debug")
pub const LOG_ENV: &str = "XTMINES_LOG";

/// Log file location: the platform data directory, or the current directory
pub fn log_path() -> PathBuf {
    match ProjectDirs::from("com", "xhbl", "xtmines") {
        Some(proj) => proj.data_dir().join("xtmines.log"),
        None => PathBuf::from("xtmines.log"),
    }
}

/// Install the global subscriber writing to the log file
/// Failures leave logging disabled; the game still runs
pub fn init() {
    let path = log_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = fs::File::create(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
