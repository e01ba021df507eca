mod dinic;
pub mod error;
pub mod graph;
mod residual;
