use std::path::PathBuf;

/// Input file read when no path is given
pub const DEFAULT_INPUT_FILE: &str = "85quranic-words.json";
/// Output file written when no path is given
pub const DEFAULT_OUTPUT_FILE: &str = "85quranic-words-updated.json";

/// Where the vocabulary is read from and where the updated copy goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TransformConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE)
    }
}
