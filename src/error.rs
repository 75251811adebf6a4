//! Errors surfaced by the terminal driver.

use board::roster::RosterError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster in {origin}: {source}")]
    RosterJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),
    #[error("failed to read script line {line}: {source}")]
    ScriptRead {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
