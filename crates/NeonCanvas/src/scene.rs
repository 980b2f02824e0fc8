use serde::{Deserialize, Serialize};

use crate::ast::Command;
use crate::error::CompileError;

/// A serializable scene document: the parsed command list, ready to compile.
///
/// This is an interchange format for the AST, not the textual scene language.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub commands: Vec<Command>,
}

impl Scene {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Reads a scene from JSON. Entries with an unrecognized `kind` become [`Command::Unknown`].
    pub fn from_json(json: &str) -> Result<Self, CompileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CompileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
