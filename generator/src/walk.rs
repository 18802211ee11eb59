//! Random-walk execution over an action graph.

use crate::graph::{ActionGraph, Node};
use board::{ChessProgram, ProgramError};
use rand::{Rng, RngCore};

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error("node {0} has no outgoing edges")]
    DeadEnd(String),
}

/// Run one walk from the graph's start node to its end node against a fresh
/// [`ChessProgram`], returning the program with its finished transcript.
///
/// Each visited node runs its action, then a destination is drawn from the
/// node's normalized outgoing distribution by inverse-CDF sampling in edge
/// declaration order. There is no step limit: the graph is responsible for
/// making the end node eventually reachable.
pub fn walk(graph: &ActionGraph, rng: &mut dyn RngCore) -> Result<ChessProgram, WalkError> {
    let mut program = ChessProgram::new();
    let mut current = graph.start();
    loop {
        let node = graph.node(current);
        tracing::trace!(node = node.name.as_str(), "visiting action node");
        (node.action)(&mut program, rng)?;
        if current == graph.end() {
            return Ok(program);
        }
        current = next_node(node, rng)?;
    }
}

fn next_node(node: &Node, rng: &mut dyn RngCore) -> Result<usize, WalkError> {
    let draw: f64 = rng.random();
    let mut mass = 0.0;
    for edge in &node.edges {
        mass += edge.probability;
        if mass >= draw {
            return Ok(edge.target);
        }
    }
    // Accumulated rounding can leave the total a hair below the draw; fall
    // back to the last declared edge.
    node.edges
        .last()
        .map(|edge| edge.target)
        .ok_or_else(|| WalkError::DeadEnd(node.name.clone()))
}
