use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowError {
    #[error("vertex {vertex} is out of range for a network with {num_nodes} vertices")]
    VertexOutOfRange { vertex: usize, num_nodes: usize },

    #[error("edge capacity must not be negative")]
    NegativeCapacity,

    #[error("self-loop on vertex {vertex} is not a valid edge edit")]
    SelfLoop { vertex: usize },

    #[error("a source and a sink need at least 2 vertices, got {vertex_count}")]
    TooFewVertices { vertex_count: usize },

    #[error("edge {edge} does not exist")]
    EdgeNotFound { edge: usize },

    #[error("flow total does not fit in the flow type")]
    FlowOverflow,
}

impl FlowError {
    /// True when the call was rejected before touching the network.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, FlowError::FlowOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_not_an_invalid_argument() {
        assert!(FlowError::NegativeCapacity.is_invalid_argument());
        assert!(FlowError::VertexOutOfRange { vertex: 3, num_nodes: 2 }.is_invalid_argument());
        assert!(!FlowError::FlowOverflow.is_invalid_argument());
    }
}
