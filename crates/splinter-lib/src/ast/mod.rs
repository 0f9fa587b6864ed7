//! Owned, serializable AST.
//!
//! Produced once per parse by the transformer and never mutated afterwards.
//! Serialized with a `"type"` tag and camelCase field names; this shape is the
//! contract downstream tools consume.

pub mod commands;
pub mod expressions;
pub mod location;
pub mod search;

pub use commands::*;
pub use expressions::*;
pub use location::{LineIndex, SourceLocation};
pub use search::*;

use serde::Serialize;

/// An ordered sequence of stages. Root of every parse and of every subsearch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Pipeline {
    pub stages: Vec<PipelineStage>,
    pub location: SourceLocation,
}

/// A stage is a command or a bare (implicit) search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PipelineStage {
    Command(Command),
    Search(SearchExpression),
}

impl PipelineStage {
    pub fn location(&self) -> SourceLocation {
        match self {
            PipelineStage::Command(command) => command.location(),
            PipelineStage::Search(search) => search.location,
        }
    }

    pub fn as_command(&self) -> Option<&Command> {
        match self {
            PipelineStage::Command(command) => Some(command),
            PipelineStage::Search(_) => None,
        }
    }
}

impl Pipeline {
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.stages.iter().filter_map(PipelineStage::as_command)
    }

    /// Pipelines nested directly in this pipeline's stages.
    pub fn subsearches(&self) -> Vec<&Pipeline> {
        self.stages
            .iter()
            .flat_map(|stage| match stage {
                PipelineStage::Command(command) => command.subsearches(),
                PipelineStage::Search(search) => search.subsearches(),
            })
            .collect()
    }
}
