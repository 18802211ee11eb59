//! Batched example generation with an optional admission filter.

use crate::example::{make_example, Example, ExampleError};
use crate::graph::ActionGraph;
use crate::walk::{walk, WalkError};
use rand::RngCore;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Example(#[from] ExampleError),
}

/// Sample walks until `count` examples pass the admission filter.
///
/// Rejected samples are discarded and do not count toward `count`. There is
/// no retry cap: callers must supply a filter the graph can satisfy.
pub fn generate_dataset(
    graph: &ActionGraph,
    count: usize,
    filter: Option<&dyn Fn(&Example) -> bool>,
    rng: &mut dyn RngCore,
) -> Result<Vec<Example>, GenerateError> {
    let mut examples = Vec::with_capacity(count);
    let mut rejected = 0usize;
    while examples.len() < count {
        let program = walk(graph, rng)?;
        let example = make_example(program.lines())?;
        match filter {
            Some(keep) if !keep(&example) => rejected += 1,
            _ => examples.push(example),
        }
    }
    if rejected > 0 {
        tracing::debug!(rejected, count, "discarded samples failing the admission filter");
    }
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{stage1, stage2, HelperProbabilities};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_returns_exactly_n_examples() {
        let graph = stage1().unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let examples = generate_dataset(&graph, 25, None, &mut rng).unwrap();
        assert_eq!(examples.len(), 25);
    }

    #[test]
    fn test_filter_is_never_violated() {
        let graph = stage2(HelperProbabilities::default()).unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        let keep = |example: &Example| example.prompt.len() <= 400;
        let examples = generate_dataset(&graph, 50, Some(&keep), &mut rng).unwrap();
        assert_eq!(examples.len(), 50);
        assert!(examples.iter().all(|example| example.prompt.len() <= 400));
    }

    #[test]
    fn test_every_example_starts_with_init() {
        let graph = stage1().unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        let examples = generate_dataset(&graph, 10, None, &mut rng).unwrap();
        for example in &examples {
            assert!(example.prompt.starts_with("$ init standard\n> ok\n"));
            assert!(example.prompt.ends_with('>'));
            assert!(example.completion.ends_with('\n'));
        }
    }
}
