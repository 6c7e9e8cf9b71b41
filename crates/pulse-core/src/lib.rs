//! Pulse Survey — core domain model.
//!
//! UI-free survey logic: the static question/scale catalog, the answer set,
//! the wizard state machine, and the transition phase machine that sequences
//! the cross-fade between screens. The desktop app in `pulse-app` drives all
//! of this through [`SurveyState::apply`].

pub mod answers;
pub mod catalog;
pub mod transition;
pub mod wizard;

pub use answers::{AnswerError, AnswerSet, SCALE_MAX, SCALE_MIN};
pub use catalog::{
    question_at, weather_by_value, QuestionDefinition, QuestionKey, WeatherOption,
    QUESTIONS, QUESTION_COUNT, WEATHER_OPTIONS,
};
pub use transition::{TransitionPhase, FADE_OUT, SELECT_HOLD};
pub use wizard::{SurveyEvent, SurveyResponse, SurveyState, WizardStep};
