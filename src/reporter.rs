use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    document::{FieldStats, AUDIO_PATH_FIELD},
    transformation_engine::TransformationResult,
};

/// Reporter for summarising a finished run in various formats
pub struct TransformationReporter {
    output_format: ReportFormat,
}

/// Available output formats for run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Console,
    Json,
    Yaml,
}

/// What a run did, in a serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub field: String,
    pub summary: FieldStats,
}

impl TransformationReporter {
    pub fn new() -> Self {
        Self {
            output_format: ReportFormat::Console,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn generate_report(&self, result: &TransformationResult) -> TransformationReport {
        TransformationReport {
            input: result.input.clone(),
            output: result.output.clone(),
            field: AUDIO_PATH_FIELD.to_string(),
            summary: result.stats.clone(),
        }
    }

    /// Format the report according to the configured output format
    pub fn format_report(&self, report: &TransformationReport) -> Result<String, ReportError> {
        match self.output_format {
            ReportFormat::Console => Ok(self.format_console_report(report)),
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| ReportError::SerializationError(e.to_string())),
            ReportFormat::Yaml => serde_yaml::to_string(report)
                .map_err(|e| ReportError::SerializationError(e.to_string())),
        }
    }

    fn format_console_report(&self, report: &TransformationReport) -> String {
        let summary = &report.summary;
        let mut output = format!(
            "Successfully added empty '{}' to {}\n",
            report.field,
            report.output.display()
        );
        output.push_str(&format!("  ✓ Lessons: {}\n", summary.lessons));
        output.push_str(&format!("  ✓ Words: {}\n", summary.words));
        output.push_str(&format!("  ✓ Added: {}\n", summary.added));
        if summary.reset > 0 {
            output.push_str(&format!("  ℹ Reset existing values: {}\n", summary.reset));
        }
        output
    }
}

impl Default for TransformationReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(ReportFormat::Console),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown report format '{0}' (expected console, json or yaml)")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> TransformationResult {
        TransformationResult {
            input: PathBuf::from("85quranic-words.json"),
            output: PathBuf::from("85quranic-words-updated.json"),
            stats: FieldStats {
                lessons: 12,
                words: 85,
                added: 84,
                reset: 1,
            },
        }
    }

    #[test]
    fn test_transformation_reporter_creation() {
        let reporter = TransformationReporter::new();
        assert_eq!(reporter.output_format, ReportFormat::Console);
    }

    #[test]
    fn test_reporter_with_format() {
        let reporter = TransformationReporter::new().with_format(ReportFormat::Json);
        assert_eq!(reporter.output_format, ReportFormat::Json);
    }

    #[test]
    fn test_console_report_names_output() {
        let reporter = TransformationReporter::new();
        let report = reporter.generate_report(&sample_result());

        let formatted = reporter.format_report(&report).unwrap();

        assert!(formatted
            .starts_with("Successfully added empty 'audio_path' to 85quranic-words-updated.json\n"));
        assert!(formatted.contains("Words: 85"));
        assert!(formatted.contains("Reset existing values: 1"));
    }

    #[test]
    fn test_console_report_hides_zero_resets() {
        let reporter = TransformationReporter::new();
        let mut result = sample_result();
        result.stats.reset = 0;

        let formatted = reporter.format_report(&reporter.generate_report(&result)).unwrap();

        assert!(!formatted.contains("Reset"));
    }

    #[test]
    fn test_json_report() {
        let reporter = TransformationReporter::new().with_format(ReportFormat::Json);
        let report = reporter.generate_report(&sample_result());

        let formatted = reporter.format_report(&report).unwrap();
        let parsed: TransformationReport = serde_json::from_str(&formatted).unwrap();

        assert_eq!(parsed, report);
    }

    #[test]
    fn test_yaml_report() {
        let reporter = TransformationReporter::new().with_format(ReportFormat::Yaml);
        let report = reporter.generate_report(&sample_result());

        let formatted = reporter.format_report(&report).unwrap();

        assert!(formatted.contains("field: audio_path"));
        assert!(formatted.contains("words: 85"));
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("yml".parse::<ReportFormat>().unwrap(), ReportFormat::Yaml);
        assert!(matches!(
            "html".parse::<ReportFormat>(),
            Err(ReportError::UnknownFormat(_))
        ));
    }
}
