//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;

use tempfile::TempDir;
use unirep::cli::Prompt;
use unirep::pipeline::{ReplaceError, ReplaceResult};

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Read a file back as UTF-8
pub fn read_file(path: &PathBuf) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// A prompt that replays canned answers and records the conversation.
///
/// Running out of answers behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, prompt: &str) -> ReplaceResult<String> {
        self.questions.push(prompt.to_string());
        self.answers.pop_front().ok_or(ReplaceError::InputClosed)
    }

    fn say(&mut self, message: &str) -> ReplaceResult<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
