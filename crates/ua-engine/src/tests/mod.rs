mod session;

use crate::Prompt;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ua_core::Identity;

/// Prompt that replays scripted answers and records the questions.
/// Runs out of answers => "no".
pub(crate) struct ScriptedPrompt {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

pub(crate) fn identity(email: &str, account_id: Option<&str>) -> Identity {
    Identity {
        account_id: account_id.map(str::to_string),
        ..Identity::new(email)
    }
}

pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Collects reporter callbacks.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub finished: Mutex<Vec<(usize, usize, String)>>,
    pub previews: Mutex<Vec<crate::BatchPreview>>,
    pub resumed: Mutex<Option<usize>>,
    /// Checkpoint file to probe after every item
    pub probe: Option<PathBuf>,
    pub probe_seen: Mutex<Vec<bool>>,
}

impl crate::RunReporter for RecordingReporter {
    fn resuming(&self, processed: usize) {
        *self.resumed.lock().unwrap() = Some(processed);
    }

    fn preview(&self, preview: &crate::BatchPreview) {
        self.previews.lock().unwrap().push(preview.clone());
    }

    fn item_finished(&self, index: usize, total: usize, result: &ua_core::OperationResult) {
        self.finished
            .lock()
            .unwrap()
            .push((index, total, result.email.clone()));
        if let Some(probe) = &self.probe {
            self.probe_seen.lock().unwrap().push(probe.exists());
        }
    }
}
