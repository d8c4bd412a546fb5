//! Question source loader.
//!
//! Loads question sets from CSV and JSON files, and validates them.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::QuizError;
use crate::model::{normalize_answer, QuestionPair};

/// File formats a question set can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Two-column rows, `"question","answer"`, no header.
    Csv,
    /// `[{"question": "...", "answer": "..."}, ...]`
    Json,
}

impl SourceFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, QuizError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(SourceFormat::Csv),
            Some("json") => Ok(SourceFormat::Json),
            _ => Err(QuizError::Format(path.to_path_buf())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

/// Load a question set from a `.csv` or `.json` file, keeping file order.
pub fn load(path: &Path) -> Result<Vec<QuestionPair>, QuizError> {
    // Reject unknown formats before touching the file.
    let format = SourceFormat::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pairs = match format {
        SourceFormat::Csv => parse_csv_str(&content, path)?,
        SourceFormat::Json => parse_json_str(&content, path)?,
    };

    tracing::debug!(
        "loaded {} question pairs from {} ({format})",
        pairs.len(),
        path.display()
    );

    Ok(pairs)
}

/// Parse CSV rows of exactly two fields (useful for testing).
pub fn parse_csv_str(content: &str, source_path: &Path) -> Result<Vec<QuestionPair>, QuizError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| QuizError::parse(source_path, e.to_string()))?;

        if record.len() != 2 {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(QuizError::parse(
                source_path,
                format!(
                    "line {line}: expected 2 fields (question, answer), found {}",
                    record.len()
                ),
            ));
        }

        pairs.push(QuestionPair::new(&record[0], &record[1]));
    }

    Ok(pairs)
}

/// Parse a JSON array of `{question, answer}` objects (useful for testing).
pub fn parse_json_str(content: &str, source_path: &Path) -> Result<Vec<QuestionPair>, QuizError> {
    serde_json::from_str::<Vec<QuestionPair>>(content)
        .map_err(|e| QuizError::parse(source_path, e.to_string()))
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based position of the offending pair.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Check a question set for common authoring mistakes.
pub fn validate_pairs(pairs: &[QuestionPair]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (index, pair) in pairs.iter().enumerate() {
        if pair.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "question is empty".into(),
            });
        } else if !seen.insert(normalize_answer(&pair.question)) {
            warnings.push(ValidationWarning {
                index,
                message: format!("duplicate question: {}", pair.question.trim()),
            });
        }

        // A blank answer can never be matched: blank input is always scored wrong.
        if pair.answer.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "answer is empty and can never be matched".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_JSON: &str = r#"[
  {"question": "2+2?", "answer": "4"},
  {"question": "Capital of France?", "answer": "paris"},
  {"question": "Largest planet?", "answer": "jupiter"}
]"#;

    const VALID_CSV: &str = "5+5,10\n\"Capital of Italy, in English?\",rome\n7+3,10\n";

    #[test]
    fn parse_json_keeps_file_order() {
        let pairs = parse_json_str(VALID_JSON, &PathBuf::from("cards.json")).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], QuestionPair::new("2+2?", "4"));
        assert_eq!(pairs[2].question, "Largest planet?");
    }

    #[test]
    fn parse_csv_handles_quoting() {
        let pairs = parse_csv_str(VALID_CSV, &PathBuf::from("problems.csv")).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1].question, "Capital of Italy, in English?");
        assert_eq!(pairs[1].answer, "rome");
    }

    #[test]
    fn parse_csv_rejects_short_row() {
        let err = parse_csv_str("1+1,2\nlonely\n", &PathBuf::from("bad.csv")).unwrap_err();
        match err {
            QuizError::Parse { message, .. } => {
                assert!(message.contains("line 2"), "{message}");
                assert!(message.contains("found 1"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_csv_rejects_extra_fields() {
        let result = parse_csv_str("1+1,2,extra\n", &PathBuf::from("bad.csv"));
        assert!(matches!(result, Err(QuizError::Parse { .. })));
    }

    #[test]
    fn parse_json_rejects_non_array() {
        let result = parse_json_str(
            r#"{"question": "2+2?", "answer": "4"}"#,
            &PathBuf::from("bad.json"),
        );
        assert!(matches!(result, Err(QuizError::Parse { .. })));
    }

    #[test]
    fn parse_json_rejects_missing_answer() {
        let result = parse_json_str(r#"[{"question": "2+2?"}]"#, &PathBuf::from("bad.json"));
        assert!(matches!(result, Err(QuizError::Parse { .. })));
    }

    #[test]
    fn parse_malformed_json() {
        let result = parse_json_str("[{ not json", &PathBuf::from("bad.json"));
        assert!(matches!(result, Err(QuizError::Parse { .. })));
    }

    #[test]
    fn empty_sources_load_as_zero_pairs() {
        assert!(parse_json_str("[]", &PathBuf::from("empty.json"))
            .unwrap()
            .is_empty());
        assert!(parse_csv_str("", &PathBuf::from("empty.csv"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn unknown_extension_fails_without_reading() {
        // The file does not exist: a Format error proves nothing was read.
        let err = load(&PathBuf::from("does-not-exist.yaml")).unwrap_err();
        assert!(matches!(err, QuizError::Format(_)));

        let err = load(&PathBuf::from("no-extension")).unwrap_err();
        assert!(matches!(err, QuizError::Format(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(&PathBuf::from("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, QuizError::Io { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("cards.json");
        std::fs::write(&json_path, VALID_JSON).unwrap();
        assert_eq!(load(&json_path).unwrap().len(), 3);

        let csv_path = dir.path().join("PROBLEMS.CSV");
        std::fs::write(&csv_path, VALID_CSV).unwrap();
        assert_eq!(load(&csv_path).unwrap().len(), 3);
    }

    #[test]
    fn validate_flags_duplicates_and_blanks() {
        let pairs = vec![
            QuestionPair::new("2+2?", "4"),
            QuestionPair::new(" 2+2? ", "4"),
            QuestionPair::new("", "x"),
            QuestionPair::new("Blank answer", "  "),
        ];
        let warnings = validate_pairs(&pairs);
        assert!(warnings
            .iter()
            .any(|w| w.index == 1 && w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.index == 2 && w.message.contains("question is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.index == 3 && w.message.contains("answer is empty")));
    }

    #[test]
    fn validate_clean_set() {
        let pairs = parse_json_str(VALID_JSON, &PathBuf::from("cards.json")).unwrap();
        assert!(validate_pairs(&pairs).is_empty());
    }
}
