//! Newline-delimited JSON persistence for generated datasets.

use generator::Example;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        source: serde_json::Error,
    },
}

impl DatasetError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write examples as one JSON object per line.
pub fn write_jsonl(path: &Path, examples: &[Example]) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for example in examples {
        let record = serde_json::to_string(example)?;
        writeln!(writer, "{record}").map_err(|e| DatasetError::io(path, e))?;
    }
    writer.flush().map_err(|e| DatasetError::io(path, e))?;
    tracing::info!(count = examples.len(), path = %path.display(), "wrote dataset");
    Ok(())
}

/// Read a dataset written by [`write_jsonl`]. Blank lines are skipped;
/// malformed lines are reported with their 1-based line number.
pub fn read_jsonl(path: &Path) -> Result<Vec<Example>, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut examples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DatasetError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let example =
            serde_json::from_str(&line).map_err(|source| DatasetError::InvalidRecord {
                line: index + 1,
                source,
            })?;
        examples.push(example);
    }
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_examples() -> Vec<Example> {
        vec![
            Example {
                prompt: "$ init standard\n>".to_string(),
                completion: " ok\n".to_string(),
            },
            Example {
                prompt: "$ init standard\n> ok\n$ print square e2\n>".to_string(),
                completion: " white pawn\n".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.jsonl");
        let examples = sample_examples();
        write_jsonl(&path, &examples).unwrap();
        assert_eq!(read_jsonl(&path).unwrap(), examples);
    }

    #[test]
    fn test_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.jsonl");
        write_jsonl(&path, &sample_examples()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.starts_with('{') && line.ends_with('}'));
        }
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.jsonl");
        std::fs::write(
            &path,
            "{\"prompt\":\"a\",\"completion\":\"b\"}\nnot json\n",
        )
        .unwrap();
        let err = read_jsonl(&path).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = read_jsonl(Path::new("/nonexistent/dataset.jsonl")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
