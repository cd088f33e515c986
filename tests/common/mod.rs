#![allow(dead_code)]

use assert_cmd::Command;
use questions::application::QuestionService;
use questions::infrastructure::JsonFileRepository;
use std::path::Path;

pub fn questions_cmd() -> Command {
    let mut cmd = Command::cargo_bin("questions").unwrap();
    cmd.env_remove("QUESTIONS_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Service over `<root>/Data/questoes.json`, creating the document
pub fn service_in(root: &Path) -> QuestionService {
    let repo = JsonFileRepository::open(root.join("Data").join("questoes.json")).unwrap();
    QuestionService::new(repo)
}
