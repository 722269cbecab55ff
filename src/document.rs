use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Field added to every word record
pub const AUDIO_PATH_FIELD: &str = "audio_path";

const LESSONS_FIELD: &str = "lessons";
const WORDS_FIELD: &str = "words";

/// Counts gathered while walking a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    pub lessons: usize,
    pub words: usize,
    /// Words that did not have the field before
    pub added: usize,
    /// Words whose existing value was replaced
    pub reset: usize,
}

/// The document does not have the lessons/words layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected an object at {location}, found {found}")]
    NotAnObject { location: String, found: &'static str },

    #[error("missing field '{field}' in {location}")]
    MissingField { location: String, field: &'static str },

    #[error("expected an array at {location}, found {found}")]
    NotAnArray { location: String, found: &'static str },
}

/// Set `audio_path` to an empty string on every word of every lesson.
///
/// Keys already present keep their position; a new `audio_path` lands after
/// the existing keys of the word. Everything outside the word records is left
/// alone. On error the document may be partially updated, so callers must not
/// persist it.
pub fn add_audio_path(document: &mut Value) -> Result<FieldStats, ShapeError> {
    let root = as_object(document, "document")?;
    let lessons = array_field(root, LESSONS_FIELD, "")?;

    let mut stats = FieldStats::default();

    for (lesson_index, lesson) in lessons.iter_mut().enumerate() {
        let lesson_location = format!("{}[{}]", LESSONS_FIELD, lesson_index);
        let lesson = as_object(lesson, &lesson_location)?;
        let words = array_field(lesson, WORDS_FIELD, &lesson_location)?;

        for (word_index, word) in words.iter_mut().enumerate() {
            let word_location = format!("{}.{}[{}]", lesson_location, WORDS_FIELD, word_index);
            let word = as_object(word, &word_location)?;

            match word.get_mut(AUDIO_PATH_FIELD) {
                Some(existing) => {
                    if existing.as_str() != Some("") {
                        warn!("Overwriting {}.{} (was {})", word_location, AUDIO_PATH_FIELD, existing);
                    }
                    *existing = Value::String(String::new());
                    stats.reset += 1;
                }
                None => {
                    word.insert(AUDIO_PATH_FIELD.to_string(), Value::String(String::new()));
                    stats.added += 1;
                }
            }
        }

        debug!("{}: {} word(s)", lesson_location, words.len());
        stats.lessons += 1;
        stats.words += words.len();
    }

    Ok(stats)
}

fn as_object<'a>(value: &'a mut Value, location: &str) -> Result<&'a mut Map<String, Value>, ShapeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ShapeError::NotAnObject {
            location: location.to_string(),
            found: type_name(other),
        }),
    }
}

fn array_field<'a>(
    map: &'a mut Map<String, Value>,
    field: &'static str,
    parent: &str,
) -> Result<&'a mut Vec<Value>, ShapeError> {
    match map.get_mut(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ShapeError::NotAnArray {
            location: if parent.is_empty() {
                field.to_string()
            } else {
                format!("{}.{}", parent, field)
            },
            found: type_name(other),
        }),
        None => Err(ShapeError::MissingField {
            location: if parent.is_empty() {
                "document".to_string()
            } else {
                parent.to_string()
            },
            field,
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
