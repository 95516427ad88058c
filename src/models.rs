use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How the analysis service should answer an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Structured JSON counts from `/api`.
    Api,
    /// A ready-made markup fragment from `/embedded`.
    Embedded,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Api => "api",
            Mode::Embedded => "embedded",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Mode::Api => "/api",
            Mode::Embedded => "/embedded",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Mode::Api),
            "embedded" => Ok(Mode::Embedded),
            other => Err(format!("mode must be 'api' or 'embedded', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub mode: String,
    pub filename: String,
    pub lines: u64,
    pub words: u64,
    pub bytes: u64,
    pub chars: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub filename: String,
    pub contents: Vec<u8>,
}

impl SelectedFile {
    pub fn new(filename: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub mode: Mode,
}

/// What a single successful submission produced. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Structured(AnalysisResult),
    Markup(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_paths_match_endpoints() {
        assert_eq!(Mode::Api.path(), "/api");
        assert_eq!(Mode::Embedded.path(), "/embedded");
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!(" API ".parse::<Mode>().unwrap(), Mode::Api);
        assert_eq!("Embedded".parse::<Mode>().unwrap(), Mode::Embedded);
        assert!("ssr".parse::<Mode>().is_err());
    }

    #[test]
    fn analysis_result_reads_service_json() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"mode":"api","filename":"report.txt","lines":10,"words":42,"bytes":512,"chars":480}"#,
        )
        .unwrap();
        assert_eq!(result.filename, "report.txt");
        assert_eq!(result.chars, 480);
    }
}
