//! Cross-fade transition sequencing.
//!
//! Step changes are staged through an explicit two-phase value instead of
//! nested timer callbacks: a transition is either idle, holding (the pause
//! after an answer click, selection still visible), or fading (content
//! hidden, pending event about to apply). At most one transition is in
//! flight; requests made while one is pending are dropped, so rapid clicks
//! cannot double-advance, and a driver that is torn down mid-delay simply
//! never calls [`TransitionPhase::step`] again.

use std::time::Duration;

use crate::wizard::SurveyEvent;

/// Pause between recording an answer and starting the fade, so the selected
/// card is visible before the question changes.
pub const SELECT_HOLD: Duration = Duration::from_millis(350);

/// Duration of the fade-out before the pending event applies.
pub const FADE_OUT: Duration = Duration::from_millis(250);

/// Staged state of the one in-flight transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Answer recorded; waiting out [`SELECT_HOLD`] before fading.
    Holding(SurveyEvent),
    /// Content hidden; `step` applies the event once [`FADE_OUT`] elapses.
    Fading(SurveyEvent),
}

impl TransitionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, TransitionPhase::Idle)
    }

    /// Whether content should currently be hidden.
    pub fn is_fading(&self) -> bool {
        matches!(self, TransitionPhase::Fading(_))
    }

    /// Start a transition toward `pending`. Answer selections hold before
    /// fading; direct navigation fades immediately. Returns `false` and
    /// changes nothing when another transition is already in flight.
    pub fn begin(&mut self, pending: SurveyEvent, hold: bool) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = if hold {
            TransitionPhase::Holding(pending)
        } else {
            TransitionPhase::Fading(pending)
        };
        true
    }

    /// Delay the driver should wait before calling [`step`](Self::step)
    /// again, or `None` when idle.
    pub fn delay(&self) -> Option<Duration> {
        match self {
            TransitionPhase::Idle => None,
            TransitionPhase::Holding(_) => Some(SELECT_HOLD),
            TransitionPhase::Fading(_) => Some(FADE_OUT),
        }
    }

    /// Advance one phase. Holding becomes fading; fading completes and hands
    /// back the pending event for the reducer.
    pub fn step(&mut self) -> Option<SurveyEvent> {
        match std::mem::take(self) {
            TransitionPhase::Idle => None,
            TransitionPhase::Holding(pending) => {
                *self = TransitionPhase::Fading(pending);
                None
            }
            TransitionPhase::Fading(pending) => Some(pending),
        }
    }
}
