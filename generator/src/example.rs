//! Slicing a finished transcript into a training example.

use board::OUTPUT_PREFIX;
use serde::{Deserialize, Serialize};

/// One training record: the prompt primes the model with everything up to
/// and including the final output marker; the completion is the rest of the
/// final line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub prompt: String,
    pub completion: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExampleError {
    #[error("transcript is empty")]
    EmptyTranscript,

    #[error("transcript does not end in an output line: {0:?}")]
    TrailingInputLine(String),
}

/// Build a (prompt, completion) pair from a complete transcript.
///
/// The prompt is every line but the last, concatenated, followed by the
/// output prefix minus its trailing space; the completion is the final line
/// with that same primer removed. Concatenating prompt and completion
/// therefore reproduces the transcript exactly.
pub fn make_example(lines: &[String]) -> Result<Example, ExampleError> {
    let (last, head) = lines.split_last().ok_or(ExampleError::EmptyTranscript)?;
    let primer = OUTPUT_PREFIX.trim_end();
    let completion = last
        .strip_prefix(primer)
        .ok_or_else(|| ExampleError::TrailingInputLine(last.clone()))?;
    let mut prompt =
        String::with_capacity(head.iter().map(String::len).sum::<usize>() + primer.len());
    for line in head {
        prompt.push_str(line);
    }
    prompt.push_str(primer);
    Ok(Example {
        prompt,
        completion: completion.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> Vec<String> {
        vec![
            "$ init standard\n".to_string(),
            "> ok\n".to_string(),
            "$ print square e2\n".to_string(),
            "> white pawn\n".to_string(),
        ]
    }

    #[test]
    fn test_prompt_and_completion_split() {
        let example = make_example(&transcript()).unwrap();
        assert_eq!(
            example.prompt,
            "$ init standard\n> ok\n$ print square e2\n>"
        );
        assert_eq!(example.completion, " white pawn\n");
    }

    #[test]
    fn test_round_trip_reproduces_transcript() {
        let lines = transcript();
        let example = make_example(&lines).unwrap();
        let rebuilt = format!("{}{}", example.prompt, example.completion);
        assert_eq!(rebuilt, lines.concat());
    }

    #[test]
    fn test_empty_transcript_is_an_error() {
        assert!(matches!(
            make_example(&[]),
            Err(ExampleError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_trailing_input_line_is_an_error() {
        let lines = vec!["$ init standard\n".to_string()];
        assert!(matches!(
            make_example(&lines),
            Err(ExampleError::TrailingInputLine(_))
        ));
    }

    #[test]
    fn test_serializes_as_prompt_completion_object() {
        let example = make_example(&transcript()).unwrap();
        let json = serde_json::to_string(&example).unwrap();
        assert!(json.starts_with(r#"{"prompt":"#));
        let parsed: Example = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, example);
    }
}
