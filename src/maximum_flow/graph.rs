use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::residual::ResidualNetwork;
use num_traits::{Bounded, CheckedAdd, CheckedSub, NumAssign, Signed};
use std::collections::VecDeque;
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum EdgeState {
    Unsaturated,
    PartiallyUsed,
    Saturated,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    // a zero capacity edge counts as saturated, it cannot carry anything more
    pub fn state(&self) -> EdgeState {
        if self.flow == self.upper {
            EdgeState::Saturated
        } else if self.flow > Flow::zero() {
            EdgeState::PartiallyUsed
        } else {
            EdgeState::Unsaturated
        }
    }
}

/// A directed multigraph with capacities on its edges.
///
/// Every `add_edge` creates a forward arc and a paired reverse arc in the underlying residual
/// network. `max_flow` mutates those arcs in place, so the per-edge flow can be read back with
/// [`FlowNetwork::edges`] afterwards. A second `max_flow` call continues from the residual state
/// left by the first one; build a new network to start from scratch.
#[derive(Default, Debug, Clone)]
pub struct FlowNetwork<Flow> {
    residual: ResidualNetwork<Flow>,
    // (from, position of the forward arc in adjacency[from])
    edges: Vec<(usize, usize)>,
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy + Bounded + CheckedAdd + CheckedSub + Debug,
{
    pub fn new(num_nodes: usize) -> Self {
        FlowNetwork { residual: ResidualNetwork::new(num_nodes), edges: Vec::new() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.residual.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    // return edge index
    pub fn add_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if upper < Flow::zero() {
            return Err(FlowError::NegativeCapacity);
        }

        let position = self.residual.add_arc_pair(from, to, upper);
        self.edges.push((from, position));
        Ok(self.edges.len() - 1)
    }

    pub fn max_flow(&mut self, source: usize, sink: usize) -> Result<Flow, FlowError> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        Dinic::default().solve(source, sink, &mut self.residual)
    }

    pub fn get_edge(&self, edge_id: usize) -> Result<Edge<Flow>, FlowError> {
        let &(from, position) = self.edges.get(edge_id).ok_or(FlowError::EdgeNotFound { edge: edge_id })?;
        let arc = &self.residual.adjacency[from][position];
        Ok(Edge { from, to: arc.to, flow: arc.flow, upper: arc.upper })
    }

    /// Real edges in the order they were added, reverse arcs excluded.
    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        self.edges.iter().map(|&(from, position)| {
            let arc = &self.residual.adjacency[from][position];
            debug_assert!(!arc.is_reverse);
            Edge { from, to: arc.to, flow: arc.flow, upper: arc.upper }
        })
    }

    // net flow leaving u over real edges
    pub fn excess_out(&self, u: usize) -> Result<Flow, FlowError> {
        self.edges().try_fold(Flow::zero(), |mut flow, edge| {
            if edge.from == u {
                flow = flow.checked_add(&edge.flow).ok_or(FlowError::FlowOverflow)?;
            }
            if edge.to == u {
                flow = flow.checked_sub(&edge.flow).ok_or(FlowError::FlowOverflow)?;
            }
            Ok(flow)
        })
    }

    /// Vertices reachable from `source` in the residual network.
    ///
    /// After `max_flow(source, sink)` this is the source side of a minimum cut.
    pub fn minimum_cut(&self, source: usize) -> Result<Vec<usize>, FlowError> {
        self.check_vertex(source)?;

        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes()];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for e in self.residual.neighbors(u) {
                if !visited[e.to] && e.residual_capacity > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }

        cut.sort_unstable();
        Ok(cut)
    }

    // total capacity of real edges leaving the vertex set
    pub fn cut_capacity(&self, cut: &[usize]) -> Result<Flow, FlowError> {
        let mut inside = vec![false; self.num_nodes()];
        for &u in cut.iter().filter(|&&u| u < self.num_nodes()) {
            inside[u] = true;
        }

        self.edges().filter(|e| inside[e.from] && !inside[e.to]).try_fold(Flow::zero(), |sum, e| sum.checked_add(&e.upper).ok_or(FlowError::FlowOverflow))
    }

    fn check_vertex(&self, u: usize) -> Result<(), FlowError> {
        if u >= self.num_nodes() {
            return Err(FlowError::VertexOutOfRange { vertex: u, num_nodes: self.num_nodes() });
        }
        Ok(())
    }
}
