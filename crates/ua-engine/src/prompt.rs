use std::io::{BufRead, Write};

/// Source of yes/no answers for the interactive gates of a run.
pub trait Prompt: Send + Sync {
    fn confirm(&mut self, question: &str) -> bool;
}

/// `yes` or `y`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Asks on stdout and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        let stdin = std::io::stdin();
        confirm_blocking(question, &mut stdin.lock(), &mut std::io::stdout())
    }
}

/// Write the question and read one answer line.
///
/// The read blocks its worker thread via [`tokio::task::block_in_place`], so
/// async callers need the multi-threaded runtime.
pub(crate) fn confirm_blocking(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> bool {
    tokio::task::block_in_place(|| {
        if write!(output, "{question} (yes/y to continue): ")
            .and_then(|_| output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(_) => false,
        }
    })
}

/// Answers every question with a fixed value.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Prompt for AutoConfirm {
    fn confirm(&mut self, _question: &str) -> bool {
        self.0
    }
}
