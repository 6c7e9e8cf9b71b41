//! Wizard state machine: tagged-union step plus a pure event reducer.
//!
//! The question index lives inside the `Survey` variant, so a stale index can
//! never leak into the comment or done screens. Every user action is a
//! [`SurveyEvent`]; [`SurveyState::apply`] either performs the transition or
//! leaves the state untouched when the event's guard fails.

use serde::Serialize;

use crate::answers::AnswerSet;
use crate::catalog::{question_at, QuestionDefinition, QuestionKey, QUESTION_COUNT};

/// Which screen of the wizard is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Intro,
    Survey {
        /// Active question, 0-based.
        index: usize,
    },
    Comment,
    Done,
}

/// A user action dispatched at the wizard.
#[derive(Clone, Debug, PartialEq)]
pub enum SurveyEvent {
    /// Intro "start" button.
    Start,
    /// Weather card clicked for the active question.
    SelectAnswer { key: QuestionKey, value: u8 },
    /// Delayed follow-up to `SelectAnswer`: move past the answered question.
    AdvanceAfterAnswer,
    /// Explicit "next" control.
    NextQuestion,
    /// Explicit "back" control.
    PrevQuestion,
    /// Question tab clicked; free navigation for review.
    JumpToQuestion(usize),
    /// "To comment" control on the last question.
    ToComment,
    /// "Back to questions" from the comment screen.
    BackToQuestions,
    /// Free-text comment edited.
    SetComment(String),
    /// "Submit" on the comment screen; purely a local transition.
    Submit,
    /// Demo-only reset from the done screen.
    Reset,
}

/// Snapshot of a completed survey. This is the payload a future backend
/// submission would send; nothing in this crate transmits it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SurveyResponse {
    pub answers: AnswerSet,
    pub comment: Option<String>,
}

/// Complete wizard state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurveyState {
    pub step: WizardStep,
    pub answers: AnswerSet,
    pub comment: String,
}

impl SurveyState {
    /// Initial state: intro screen, nothing answered, empty comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active question index while on the survey screen.
    pub fn current_index(&self) -> Option<usize> {
        match self.step {
            WizardStep::Survey { index } => Some(index),
            _ => None,
        }
    }

    /// Definition of the active question while on the survey screen.
    pub fn current_question(&self) -> Option<&'static QuestionDefinition> {
        self.current_index().and_then(question_at)
    }

    /// Whether the active question has been answered ("next" enablement).
    pub fn can_advance(&self) -> bool {
        match self.current_question() {
            Some(q) => self.answers.answered(q.key),
            None => false,
        }
    }

    /// Whether the "to comment" control is enabled: last question active and
    /// all three answered.
    pub fn can_finish(&self) -> bool {
        self.current_index() == Some(QUESTION_COUNT - 1) && self.answers.all_answered()
    }

    /// Response payload for the submit extension point. The comment is
    /// omitted when blank.
    pub fn response(&self) -> SurveyResponse {
        let trimmed = self.comment.trim();
        SurveyResponse {
            answers: self.answers.clone(),
            comment: (!trimmed.is_empty()).then(|| self.comment.clone()),
        }
    }

    /// Apply one event. Returns `true` when the event's guard passed and the
    /// state changed; guarded-out events leave the state untouched.
    pub fn apply(&mut self, event: SurveyEvent) -> bool {
        match (self.step, event) {
            (WizardStep::Intro, SurveyEvent::Start) => {
                self.step = WizardStep::Survey { index: 0 };
                true
            }

            // Answers are only recorded on the survey screen, and only for
            // the question currently showing.
            (WizardStep::Survey { index }, SurveyEvent::SelectAnswer { key, value }) => {
                match question_at(index) {
                    Some(q) if q.key == key => self.answers.set(key, value).is_ok(),
                    _ => false,
                }
            }

            (WizardStep::Survey { index }, SurveyEvent::AdvanceAfterAnswer) => {
                if !self.can_advance() {
                    return false;
                }
                self.step = if index + 1 < QUESTION_COUNT {
                    WizardStep::Survey { index: index + 1 }
                } else {
                    WizardStep::Comment
                };
                true
            }

            (WizardStep::Survey { index }, SurveyEvent::NextQuestion) => {
                if index + 1 < QUESTION_COUNT && self.can_advance() {
                    self.step = WizardStep::Survey { index: index + 1 };
                    true
                } else {
                    false
                }
            }

            (WizardStep::Survey { index }, SurveyEvent::PrevQuestion) => {
                if index > 0 {
                    self.step = WizardStep::Survey { index: index - 1 };
                    true
                } else {
                    false
                }
            }

            (WizardStep::Survey { .. }, SurveyEvent::JumpToQuestion(target)) => {
                if target < QUESTION_COUNT {
                    self.step = WizardStep::Survey { index: target };
                    true
                } else {
                    false
                }
            }

            (WizardStep::Survey { .. }, SurveyEvent::ToComment) => {
                if self.can_finish() {
                    self.step = WizardStep::Comment;
                    true
                } else {
                    false
                }
            }

            (WizardStep::Comment, SurveyEvent::BackToQuestions) => {
                self.step = WizardStep::Survey {
                    index: QUESTION_COUNT - 1,
                };
                true
            }

            (WizardStep::Comment, SurveyEvent::SetComment(text)) => {
                self.comment = text;
                true
            }

            (WizardStep::Comment, SurveyEvent::Submit) => {
                self.step = WizardStep::Done;
                true
            }

            // Reset clears everything in one assignment so the state is
            // never partially restored.
            (WizardStep::Done, SurveyEvent::Reset) => {
                *self = Self::new();
                true
            }

            _ => false,
        }
    }
}
