use std::fmt;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnknownNode,
    DanglingEdge,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownNode => "E2001",
            Self::DanglingEdge => "E2002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnknownNode => "Node not found in graph",
            Self::DanglingEdge => "Edge points at a node that is not in the graph",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::UnknownNode => Some("Run `influence nodes` to list the available node names."),
            Self::DanglingEdge => {
                Some("Register every edge target as a node, or build the graph with `add_edge`.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by graph queries.
///
/// Unreachability is not an error: it is reported as
/// [`Distance::INFINITE`](crate::graph::Distance::INFINITE).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A query argument, or a node reached during traversal, is not a key
    /// of the adjacency map.
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// `from` lists `to` as a neighbor but `to` is not a key.
    #[error("dangling edge {from} -> {to}: target is not a node")]
    DanglingEdge { from: String, to: String },
}

impl GraphError {
    pub(crate) fn unknown(node: impl Into<String>) -> Self {
        Self::UnknownNode { node: node.into() }
    }

    /// The stable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownNode { .. } => ErrorCode::UnknownNode,
            Self::DanglingEdge { .. } => ErrorCode::DanglingEdge,
        }
    }

    /// Remediation hint, falling back to the code's summary.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or_else(|| code.message()).to_string()
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
