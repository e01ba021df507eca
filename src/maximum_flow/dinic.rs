use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::residual::ResidualNetwork;
use log::{debug, trace};
use num_traits::{Bounded, CheckedAdd, NumAssign, Signed};
use std::fmt::Debug;

#[derive(Default)]
pub struct Dinic {
    current_edge: Vec<usize>,
}

impl Dinic {
    // fails with FlowOverflow when the total does not fit in Flow; arcs keep the flow pushed so far
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, network: &mut ResidualNetwork<Flow>) -> Result<Flow, FlowError>
    where
        Flow: NumAssign + Signed + Ord + Copy + Bounded + CheckedAdd + Debug,
    {
        let mut flow = Flow::zero();
        if source == sink {
            return Ok(flow);
        }
        self.current_edge.resize(network.num_nodes, 0);

        let mut phase = 0;
        loop {
            network.update_levels(source);

            // no s-t path
            if !network.is_reachable(sink) {
                break;
            }

            self.current_edge.fill(0);
            let mut phase_flow = Flow::zero();
            loop {
                let delta = self.dfs(source, sink, Flow::max_value(), network);
                if delta == Flow::zero() {
                    break;
                }
                trace!("augmenting path pushed {:?}", delta);
                phase_flow = phase_flow.checked_add(&delta).ok_or(FlowError::FlowOverflow)?;
            }

            debug!("phase {}: sink level {}, pushed {:?}", phase, network.levels[sink], phase_flow);
            flow = flow.checked_add(&phase_flow).ok_or(FlowError::FlowOverflow)?;
            phase += 1;
        }

        debug!("maximum flow {:?} from {} to {} after {} phases", flow, source, sink, phase);
        Ok(flow)
    }

    fn dfs<Flow>(&mut self, u: usize, sink: usize, upper: Flow, network: &mut ResidualNetwork<Flow>) -> Flow
    where
        Flow: NumAssign + Signed + Ord + Copy,
    {
        if upper == Flow::zero() {
            return Flow::zero();
        }
        if u == sink {
            return upper;
        }

        while self.current_edge[u] < network.adjacency[u].len() {
            let i = self.current_edge[u];
            if network.is_admissible_arc(u, i) {
                let (v, residual_capacity) = (network.adjacency[u][i].to, network.adjacency[u][i].residual_capacity);
                let d = self.dfs(v, sink, upper.min(residual_capacity), network);
                if d > Flow::zero() {
                    network.push_flow(u, i, d);
                    return d;
                }
            }
            // this arc cannot carry more flow in the current level graph
            self.current_edge[u] += 1;
        }

        Flow::zero()
    }
}
