// Adds an empty audio_path to every word of a lessons file
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod reporter;
pub mod transformation_engine;

// Re-export core types for convenience
pub use config::{TransformConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use document::{add_audio_path, FieldStats, ShapeError, AUDIO_PATH_FIELD};
pub use error::{ErrorKind, MalformedReason, TransformError};
pub use reporter::{ReportFormat, TransformationReport, TransformationReporter};
pub use transformation_engine::{transform, TransformationResult, Transformer};
