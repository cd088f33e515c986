//! File system repository
//!
//! The whole question bank lives in one JSON array document. Every call
//! reads or rewrites the complete document; nothing is cached between calls.

use crate::domain::question::canonicalize_keys;
use crate::domain::Question;
use crate::error::{QuestionsError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Directory, relative to the content root, that holds the document
pub const DATA_DIR: &str = "Data";

/// File name of the question document
pub const DATA_FILE: &str = "questoes.json";

/// Abstract storage for the question collection
///
/// Implementations load and save the collection as a whole. A save replaces
/// the document in one step, so a load sees either the previous or the new
/// collection. There is no locking: two callers that each load, mutate and
/// save concurrently will lose the earlier write (last writer wins).
pub trait QuestionRepository {
    /// Location of the backing document
    fn location(&self) -> &Path;

    /// Make sure the document exists, creating an empty collection if needed
    fn initialize(&self) -> Result<()>;

    /// Read the full collection in storage order
    fn load_all(&self) -> Result<Vec<Question>>;

    /// Overwrite the stored collection
    fn save_all(&self, questions: &[Question]) -> Result<()>;
}

/// JSON-file implementation of QuestionRepository
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    pub path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the given document path
    pub fn new(path: PathBuf) -> Self {
        JsonFileRepository { path }
    }

    /// Repository for the default document under a content root
    /// (`<root>/Data/questoes.json`)
    pub fn in_content_root(root: &Path) -> Self {
        Self::new(root.join(DATA_DIR).join(DATA_FILE))
    }

    /// Create the repository and initialize its document
    pub fn open(path: PathBuf) -> Result<Self> {
        let repo = Self::new(path);
        repo.initialize()?;
        Ok(repo)
    }

    /// Sibling file a save is staged in; unique per call so concurrent
    /// saves never share one.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DATA_FILE);
        self.path
            .with_file_name(format!("{}.{}.tmp", name, Uuid::new_v4().simple()))
    }

    /// Decode a document body. Empty, `null` and malformed content all decode
    /// to an empty collection.
    fn decode(&self, contents: &str) -> Vec<Question> {
        if contents.trim().is_empty() {
            return Vec::new();
        }

        let mut value: Value = match serde_json::from_str(contents) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "question document is not valid JSON, treating as empty"
                );
                return Vec::new();
            }
        };

        canonicalize_keys(&mut value);

        match serde_json::from_value::<Option<Vec<Question>>>(value) {
            Ok(questions) => questions.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "question document has an unexpected shape, treating as empty"
                );
                Vec::new()
            }
        }
    }
}

impl QuestionRepository for JsonFileRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "creating empty question document");
            fs::write(&self.path, "[]")?;
        }

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Question>> {
        let contents = fs::read_to_string(&self.path).map_err(QuestionsError::Io)?;
        let questions = self.decode(&contents);
        tracing::debug!(count = questions.len(), "loaded question bank");
        Ok(questions)
    }

    /// Readers only ever see a complete document: the new contents are
    /// written to a temp file in the same directory and renamed into place.
    fn save_all(&self, questions: &[Question]) -> Result<()> {
        let contents = serde_json::to_string_pretty(questions)?;
        let tmp_path = self.temp_path();

        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(QuestionsError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(QuestionsError::Io(e));
        }

        tracing::debug!(count = questions.len(), "saved question bank");
        Ok(())
    }
}
