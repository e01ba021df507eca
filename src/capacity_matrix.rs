use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::{Edge, FlowNetwork};
use log::debug;

#[derive(PartialEq, Debug, Clone)]
pub struct FlowReport {
    pub total: i64,
    pub edges: Vec<Edge<i64>>,
}

/// Raw `n x n` capacity entries as typed by a user.
///
/// Entry `(i, j)` describes the edge `i -> j`. Vertex `0` is the source and vertex `n - 1` the
/// sink. Entries that do not parse to a positive integer produce no edge.
#[derive(Default, Debug, Clone)]
pub struct CapacityMatrix {
    num_nodes: usize,
    entries: Vec<Vec<String>>,
}

impl CapacityMatrix {
    pub fn new(num_nodes: usize) -> Result<Self, FlowError> {
        if num_nodes < 2 {
            return Err(FlowError::TooFewVertices { vertex_count: num_nodes });
        }
        Ok(CapacityMatrix { num_nodes, entries: vec![vec![String::new(); num_nodes]; num_nodes] })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.num_nodes - 1
    }

    pub fn entry(&self, i: usize, j: usize) -> Result<&str, FlowError> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        Ok(&self.entries[i][j])
    }

    pub fn set_entry(&mut self, i: usize, j: usize, text: &str) -> Result<(), FlowError> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        self.entries[i][j] = text.to_string();
        Ok(())
    }

    /// Edge edit followed by a recomputation on the edited matrix.
    ///
    /// Unlike `set_entry`, self-loops are refused. A rejected edit leaves the matrix untouched;
    /// once the endpoints are accepted the entry is stored even if the recomputation fails.
    pub fn update_edge(&mut self, from: usize, to: usize, capacity: i64) -> Result<FlowReport, FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            return Err(FlowError::SelfLoop { vertex: from });
        }
        self.entries[from][to] = capacity.to_string();
        self.calculate_max_flow()
    }

    /// `(from, to, capacity)` for every entry holding a positive integer, row by row.
    pub fn edge_specs(&self) -> Vec<(usize, usize, i64)> {
        let mut specs = Vec::new();
        for (i, row) in self.entries.iter().enumerate() {
            for (j, text) in row.iter().enumerate() {
                match parse_capacity(text) {
                    Some(capacity) if capacity > 0 => specs.push((i, j, capacity)),
                    _ => {}
                }
            }
        }
        specs
    }

    pub fn build_network(&self) -> Result<FlowNetwork<i64>, FlowError> {
        let mut network = FlowNetwork::new(self.num_nodes);
        for (from, to, capacity) in self.edge_specs() {
            network.add_edge(from, to, capacity)?;
        }
        Ok(network)
    }

    // a fresh network every time, earlier results are never reused
    pub fn calculate_max_flow(&self) -> Result<FlowReport, FlowError> {
        let mut network = self.build_network()?;
        debug!("computing maximum flow on {} vertices and {} edges", network.num_nodes(), network.num_edges());

        let total = network.max_flow(self.source(), self.sink())?;
        Ok(FlowReport { total, edges: network.edges().collect() })
    }

    fn check_vertex(&self, u: usize) -> Result<(), FlowError> {
        if u >= self.num_nodes {
            return Err(FlowError::VertexOutOfRange { vertex: u, num_nodes: self.num_nodes });
        }
        Ok(())
    }
}

/// Lenient integer parsing of a form field: leading whitespace, an optional sign, an optional
/// `0x`/`0X` hexadecimal prefix, then the longest run of digits in that radix. Trailing garbage
/// is ignored, so `"12abc"`, `"3.7"` and `"0x10"` give 12, 3 and 16.
///
/// Returns `None` when no digit follows. A digit run too large for `i64` also gives `None`, so
/// such an entry is skipped rather than clamped.
pub fn parse_capacity(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits.bytes().take_while(|b| (*b as char).is_digit(radix)).count();
    if end == 0 {
        return None;
    }
    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
