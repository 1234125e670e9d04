/// Errors surfaced by graph operations and analysis queries.
///
/// Vertex identifiers are rendered with `Debug` so the error type stays
/// independent of the graph's vertex parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("no such vertex: {0}")]
    NoSuchVertex(String),

    #[error("no edge from {from} to {to}")]
    NotFound { from: String, to: String },

    #[error("requested top {requested} of only {available} vertices")]
    EmptyRankingRequest { requested: usize, available: usize },
}

impl GraphError {
    pub(crate) fn no_such_vertex<V: std::fmt::Debug>(v: &V) -> Self {
        GraphError::NoSuchVertex(format!("{v:?}"))
    }

    pub(crate) fn not_found<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        GraphError::NotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Convenience alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::no_such_vertex(&"Kevin Bacon");
        assert_eq!(err.to_string(), "no such vertex: \"Kevin Bacon\"");

        let err = GraphError::not_found(&1u64, &2u64);
        assert_eq!(err.to_string(), "no edge from 1 to 2");

        let err = GraphError::EmptyRankingRequest {
            requested: 5,
            available: 3,
        };
        assert_eq!(err.to_string(), "requested top 5 of only 3 vertices");
    }
}
