//! Project-wide constants.

use std::path::PathBuf;

pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Public endpoint that answers yes, no or maybe.
pub const DEFAULT_API_URL: &str = "https://yesno.wtf/api";

/// Key-value slot holding the JSON-encoded history.
pub const HISTORY_KEY: &str = "bola.history";

/// Message attached to the synthetic answer when the endpoint can't be reached.
pub const ERROR_MESSAGE: &str = "Ups... No pude consultar la bola mágica.";

/// Label of the synthetic answer.
pub const ERROR_LABEL: &str = "error";

/// Default database path: `~/.bola/bola.db`.
/// Falls back to the working directory when there is no home.
pub fn default_db_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".bola").join("bola.db"),
        None => PathBuf::from("bola.db"),
    }
}
