//! Recorded action scripts.

use super::action::Action;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordered list of actions replayed against an input state.
///
/// Accepted JSON layouts:
/// ```json
/// {"actions": [{"action": "undo"}]}
/// [{"action": "undo"}]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub actions: Vec<Action>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScriptFile {
    Wrapped(Script),
    Bare(Vec<Action>),
}

impl Script {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Parses a script from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        let file: ScriptFile = serde_json::from_str(json).context("Invalid script JSON")?;
        Ok(match file {
            ScriptFile::Wrapped(script) => script,
            ScriptFile::Bare(actions) => Self { actions },
        })
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let script =
            Self::parse(&json).with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!(
            "Loaded {} action(s) from {}",
            script.actions.len(),
            path.display()
        );
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
