use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header line: {0}")]
    Header(String),

    #[error("k must be at least 2, got {0}")]
    KTooSmall(usize),

    #[error("malformed read on line {line}: {reason}")]
    ReadFormat { line: usize, reason: String },

    #[error("no start node: graph has no edges")]
    NoStartNode,

    #[error("no Eulerian path: node {node} has {out} outgoing and {inc} incoming edges")]
    Unbalanced { node: String, out: usize, inc: usize },

    #[error("graph is not Eulerian: walk used {used} of {total} edges")]
    NotEulerian { used: usize, total: usize },

    #[error("unexpected node shape: {0}")]
    NodeShape(String),

    #[error("empty walk")]
    EmptyWalk,
}

pub type Result<T> = std::result::Result<T, AsmError>;
