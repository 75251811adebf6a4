//! Driver configuration: where the roster comes from and how drops resolve.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fs;
use std::path::Path;

use board::engine::{DropPolicy, EngineConfig, EngineCore};
use board::roster::{Roster, RosterConfig};
use clap::ValueEnum;

use crate::error::CliError;

/// Occupied-slot policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// Last drop wins; the previous occupant returns to the pool.
    #[default]
    Replace,
    /// Filled slots refuse further drops.
    Reject,
}

impl From<PolicyArg> for DropPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Replace => Self::Replace,
            PolicyArg::Reject => Self::Reject,
        }
    }
}

/// Load the roster description from `path`, or the built-in roster when absent.
pub fn load_roster_config(path: Option<&Path>) -> Result<RosterConfig, CliError> {
    let Some(path) = path else {
        tracing::debug!("using built-in roster");
        return Ok(RosterConfig::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|source| CliError::Read { path: path.display().to_string(), source })?;
    parse_roster_config(&text, &path.display().to_string())
}

/// Parse a roster description. `origin` names the source in error messages.
pub fn parse_roster_config(text: &str, origin: &str) -> Result<RosterConfig, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::RosterJson { origin: origin.to_owned(), source })
}

/// Build an engine from a roster description and policy.
pub fn build_engine(roster: &RosterConfig, policy: PolicyArg) -> Result<EngineCore, CliError> {
    let roster = Roster::from_config(roster)?;
    tracing::info!(items = roster.len(), slots = roster.slots().len(), ?policy, "roster loaded");
    Ok(EngineCore::new(roster, EngineConfig { policy: policy.into() }))
}
