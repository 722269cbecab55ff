use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde_json::Value;

use crate::{
    config::TransformConfig,
    document::{self, FieldStats},
    error::TransformError,
    output,
};

/// Reads a vocabulary file, adds `audio_path` to every word and writes the result
pub struct Transformer {
    config: TransformConfig,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: FieldStats,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Run the migration with the configured paths
    pub fn run(&self) -> Result<TransformationResult, TransformError> {
        let input = self.config.input.as_path();
        let output_path = self.config.output.as_path();

        let mut document = load_document(input)?;

        let stats = document::add_audio_path(&mut document)
            .map_err(|e| TransformError::malformed(input, e))?;
        info!(
            "Updated {} word(s) across {} lesson(s)",
            stats.words, stats.lessons
        );

        let rendered = output::render_document(&document)
            .map_err(|e| TransformError::io(output_path, e.into()))?;
        output::write_atomically(output_path, rendered.as_bytes())
            .map_err(|e| TransformError::io(output_path, e))?;
        info!("Wrote {} byte(s) to {}", rendered.len(), output_path.display());

        Ok(TransformationResult {
            input: input.to_path_buf(),
            output: output_path.to_path_buf(),
            stats,
        })
    }
}

/// Read `input_path`, add `audio_path` to every word, and write the result to `output_path`
pub fn transform(input_path: &Path, output_path: &Path) -> Result<TransformationResult, TransformError> {
    Transformer::new(TransformConfig::new(input_path, output_path)).run()
}

fn load_document(path: &Path) -> Result<Value, TransformError> {
    info!("Reading {}", path.display());
    let bytes = fs::read(path).map_err(|e| TransformError::reading(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| TransformError::malformed(path, e))
}
