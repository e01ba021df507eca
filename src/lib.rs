pub mod capacity_matrix;
pub mod maximum_flow;

pub use crate::capacity_matrix::{CapacityMatrix, FlowReport};
pub use crate::maximum_flow::error::FlowError;
pub use crate::maximum_flow::graph::{Edge, EdgeState, FlowNetwork};
