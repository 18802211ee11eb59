//! Randomized transcript generation.
//!
//! A weighted directed graph of named actions drives a [`board::ChessProgram`]
//! through a random walk; the finished transcript is sliced into a
//! (prompt, completion) training example. Randomness is always drawn from an
//! injected generator so runs can be reproduced with a seed.

pub mod dataset;
pub mod example;
pub mod graph;
pub mod stages;
pub mod walk;

pub use dataset::{generate_dataset, GenerateError};
pub use example::{make_example, Example, ExampleError};
pub use graph::{ActionGraph, GraphBuilder, GraphError};
pub use stages::{stage1, stage2, HelperProbabilities};
pub use walk::{walk, WalkError};
