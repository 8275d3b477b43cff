use serde::{Deserialize, Serialize};

/// An inline multiple-choice question embedded in a topic section.
///
/// `correct_index` points into `options`; the registry validates the range
/// when the catalog loads, so render code can index without checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSpec {
    /// Catalog-wide unique id, used to record completion across sessions.
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    /// Shown once the quiz is answered, whatever the verdict.
    pub explanation: String,
}

/// Outcome of an answered quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Per-instance quiz state.
///
/// `Unanswered -> Answered` on the first selection, terminal until an
/// explicit [`QuizAttempt::reset`]. Owned by the topic view and discarded
/// with it; completion marks are persisted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizAttempt {
    #[default]
    Unanswered,
    Answered { choice: usize, verdict: Verdict },
}

impl QuizAttempt {
    /// Answer with the given option index. A no-op once answered; only
    /// [`QuizAttempt::reset`] re-arms the question.
    pub fn answer(&mut self, choice: usize, correct_index: usize) {
        if matches!(self, QuizAttempt::Unanswered) {
            let verdict = if choice == correct_index {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            };
            *self = QuizAttempt::Answered { choice, verdict };
        }
    }

    /// Full reset back to the initial state.
    pub fn reset(&mut self) {
        *self = QuizAttempt::Unanswered;
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, QuizAttempt::Answered { .. })
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            QuizAttempt::Unanswered => None,
            QuizAttempt::Answered { verdict, .. } => Some(*verdict),
        }
    }

    /// The selected option index, if any.
    pub fn choice(&self) -> Option<usize> {
        match self {
            QuizAttempt::Unanswered => None,
            QuizAttempt::Answered { choice, .. } => Some(*choice),
        }
    }
}
