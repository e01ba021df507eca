use std::collections::VecDeque;
use std::fmt::Debug;

use num_traits::{NumAssign, Signed};

#[derive(PartialEq, Debug, Clone)]
pub struct DirectedArc<Flow> {
    pub to: usize,
    // position of the paired arc in adjacency[to]
    pub rev: usize,
    pub residual_capacity: Flow,
    pub upper: Flow,
    pub flow: Flow,
    pub is_reverse: bool,
}

#[derive(Default, Debug, Clone)]
pub struct ResidualNetwork<Flow> {
    pub num_nodes: usize,
    pub adjacency: Vec<Vec<DirectedArc<Flow>>>,
    pub levels: Vec<usize>, // distance from source in residual network
    que: VecDeque<usize>,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        ResidualNetwork { num_nodes, adjacency: vec![Vec::new(); num_nodes], levels: vec![num_nodes; num_nodes], que: VecDeque::new() }
    }

    // returns the position of the forward arc in adjacency[from]
    pub fn add_arc_pair(&mut self, from: usize, to: usize, upper: Flow) -> usize {
        let position_from = self.adjacency[from].len();
        // a self-loop sees its own forward arc before the reverse one is pushed
        let position_to = if from == to { position_from + 1 } else { self.adjacency[to].len() };

        self.adjacency[from].push(DirectedArc { to, rev: position_to, residual_capacity: upper, upper, flow: Flow::zero(), is_reverse: false });
        self.adjacency[to].push(DirectedArc { to: from, rev: position_from, residual_capacity: Flow::zero(), upper: Flow::zero(), flow: Flow::zero(), is_reverse: true });
        position_from
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<DirectedArc<Flow>> {
        self.adjacency[u].iter()
    }

    #[inline]
    pub fn push_flow(&mut self, u: usize, i: usize, flow: Flow) {
        let (v, rev) = (self.adjacency[u][i].to, self.adjacency[u][i].rev);

        let arc = &mut self.adjacency[u][i];
        arc.residual_capacity -= flow;
        arc.flow += flow;

        let reverse = &mut self.adjacency[v][rev];
        reverse.residual_capacity += flow;
        reverse.flow -= flow;
    }

    // O(n + m)
    // calculate the distance from source to every vertex in the residual network
    // if such a path does not exist, levels[u] becomes self.num_nodes
    pub fn update_levels(&mut self, source: usize) {
        self.que.clear();
        self.levels.fill(self.num_nodes);
        self.levels[source] = 0;
        self.que.push_back(source);

        while let Some(u) = self.que.pop_front() {
            for e in self.adjacency[u].iter() {
                if e.residual_capacity > Flow::zero() && self.levels[e.to] == self.num_nodes {
                    self.levels[e.to] = self.levels[u] + 1;
                    self.que.push_back(e.to);
                }
            }
        }
    }

    #[inline]
    pub fn is_reachable(&self, u: usize) -> bool {
        self.levels[u] < self.num_nodes
    }

    #[inline]
    pub fn is_admissible_arc(&self, from: usize, i: usize) -> bool {
        let arc = &self.adjacency[from][i];
        arc.residual_capacity > Flow::zero() && self.levels[arc.to] == self.levels[from] + 1
    }
}
