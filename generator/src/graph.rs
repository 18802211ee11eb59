//! Weighted action graphs.
//!
//! Nodes are named actions over the shared program state; edges carry
//! positive weights that are normalized per source node into a categorical
//! distribution. Structural problems (dangling edges, dead ends reachable
//! from the start, bad weights) are configuration errors and are rejected
//! when the graph is built, never during a walk.

use board::{ChessProgram, ProgramError};
use rand::RngCore;
use std::collections::VecDeque;

/// A node's side effect: issue zero or more commands against the program.
pub type Action = Box<dyn Fn(&mut ChessProgram, &mut dyn RngCore) -> Result<(), ProgramError>>;

pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) action: Action,
    pub(crate) edges: Vec<Edge>,
}

pub(crate) struct Edge {
    pub(crate) target: usize,
    pub(crate) probability: f64,
}

/// A validated action graph with a declared start and end node.
pub struct ActionGraph {
    nodes: Vec<Node>,
    start: usize,
    end: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("edge {from} -> {to} has non-positive weight {weight}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("node {0} is reachable from the start but has no outgoing edges")]
    DeadEnd(String),
}

/// Declares nodes and weighted edges in a fixed order, then validates.
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<(String, Action)>,
    edges: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(
        mut self,
        name: impl Into<String>,
        action: impl Fn(&mut ChessProgram, &mut dyn RngCore) -> Result<(), ProgramError> + 'static,
    ) -> Self {
        self.nodes.push((name.into(), Box::new(action)));
        self
    }

    /// Declare a weighted edge. Declaration order is preserved and breaks
    /// ties during sampling.
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    pub fn build(self, start: &str, end: &str) -> Result<ActionGraph, GraphError> {
        let mut nodes: Vec<Node> = Vec::with_capacity(self.nodes.len());
        for (name, action) in self.nodes {
            if nodes.iter().any(|node| node.name == name) {
                return Err(GraphError::DuplicateNode(name));
            }
            nodes.push(Node {
                name,
                action,
                edges: Vec::new(),
            });
        }

        let index_of = |name: &str, nodes: &[Node]| -> Result<usize, GraphError> {
            nodes
                .iter()
                .position(|node| node.name == name)
                .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
        };

        let mut weights: Vec<Vec<f64>> = vec![Vec::new(); nodes.len()];
        for (from, to, weight) in self.edges {
            let source = index_of(&from, &nodes)?;
            let target = index_of(&to, &nodes)?;
            if !weight.is_finite() || weight <= 0.0 {
                return Err(GraphError::InvalidWeight { from, to, weight });
            }
            nodes[source].edges.push(Edge {
                target,
                probability: 0.0,
            });
            weights[source].push(weight);
        }

        // Normalize each node's outgoing weights into probabilities.
        for (node, node_weights) in nodes.iter_mut().zip(&weights) {
            let total: f64 = node_weights.iter().sum();
            for (edge, weight) in node.edges.iter_mut().zip(node_weights) {
                edge.probability = weight / total;
            }
        }

        let start = index_of(start, &nodes)?;
        let end = index_of(end, &nodes)?;

        // Every node reachable from the start must have a way onward,
        // unless it is the end node.
        let mut visited = vec![false; nodes.len()];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        while let Some(current) = queue.pop_front() {
            if current != end && nodes[current].edges.is_empty() {
                return Err(GraphError::DeadEnd(nodes[current].name.clone()));
            }
            for edge in &nodes[current].edges {
                if !visited[edge.target] {
                    visited[edge.target] = true;
                    queue.push_back(edge.target);
                }
            }
        }

        Ok(ActionGraph { nodes, start, end })
    }
}

impl ActionGraph {
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn end(&self) -> usize {
        self.end
    }

    pub(crate) fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// The normalized outgoing distribution of a node, in declaration order.
    pub fn edge_probabilities(&self, name: &str) -> Option<Vec<(&str, f64)>> {
        let node = self.nodes.iter().find(|node| node.name == name)?;
        Some(
            node.edges
                .iter()
                .map(|edge| (self.nodes[edge.target].name.as_str(), edge.probability))
                .collect(),
        )
    }
}
