//! Initialize question bank use case

use crate::error::{QuestionsError, Result};
use crate::infrastructure::{JsonFileRepository, QuestionRepository, ServerConfig};
use std::fs;
use std::path::Path;

/// Initialize a new question bank at the specified content root.
///
/// Writes a default `questions.toml` and an empty question document. Fails
/// if the directory already holds a config file; an existing document is
/// left as it is.
pub fn init(path: &Path) -> Result<JsonFileRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    if ServerConfig::exists_in(path) {
        return Err(QuestionsError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    let config = ServerConfig::default();
    config.save_to_dir(path)?;

    let repo = JsonFileRepository::open(config.data_path(path))?;
    tracing::info!(root = %path.display(), "initialized question bank");

    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("bank");

        let repo = init(&root).unwrap();

        assert!(root.join("questions.toml").is_file());
        assert!(root.join("Data").join("questoes.json").is_file());
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();

        match init(temp.path()).unwrap_err() {
            QuestionsError::Config(msg) => assert!(msg.contains("already initialized")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
