use std::io::ErrorKind;

use thiserror::Error;

use crate::NodeIndex;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error("Network has no nodes")]
    EmptyGraph,
    #[error("Location {0:?} not found")]
    InvalidNode(String),
    #[error("No route from {start:?} to {end:?}")]
    Unreachable { start: String, end: String },
    #[error("Criterion selector is not valid, expected 1, 2 or 3: {0}")]
    InvalidCriterion(u8),
    #[error("Criterion is not valid, expected distance, fare or time: {0:?}")]
    UnknownCriterion(String),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum NetworkError {
    #[error("Location {0:?} not found")]
    UnknownNode(String),
    #[error("Node index {0} is out of range")]
    IndexOutOfRange(NodeIndex),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FormatError {
    #[error("Network file I/O error: {0:?}")]
    Io(ErrorKind),
    #[error("Network file is missing the node count")]
    MissingNodeCount,
    #[error("Network file node count is not valid: {0:?}")]
    InvalidNodeCount(String),
    #[error("Network file is missing the name of node {0}")]
    MissingNodeName(usize),
    #[error("Network file is missing the weights between nodes {row} and {column}")]
    MissingWeight { row: usize, column: usize },
    #[error("Network file weight is not valid: {0:?}")]
    InvalidWeight(String),
    #[error("Location name cannot span multiple lines: {0:?}")]
    InvalidNodeName(String),
    #[error("Weights between nodes {row} and {column} use the value reserved for no edge")]
    ReservedWeight { row: usize, column: usize },
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl From<std::io::Error> for FormatError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.kind())
    }
}
