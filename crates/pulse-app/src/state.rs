//! Signal-backed view state shared across wizard components.
//!
//! All survey logic lives in `pulse-core`; this module owns the two signals
//! (reducer state + transition phase) and the one async driver that walks a
//! staged transition through its delays. The driver task is scoped to the
//! wizard component, so teardown mid-delay just drops it without any further
//! state mutation.

use dioxus::prelude::*;
use pulse_core::{QuestionKey, SurveyEvent, SurveyState, TransitionPhase};

/// Shared wizard state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct SurveyContext {
    pub state: Signal<SurveyState>,
    pub phase: Signal<TransitionPhase>,
}

impl SurveyContext {
    /// Install a fresh context for one wizard mount.
    pub fn provide() -> Self {
        use_context_provider(|| SurveyContext {
            state: Signal::new(SurveyState::new()),
            phase: Signal::new(TransitionPhase::default()),
        })
    }
}

/// Record an answer for the active question, then stage the delayed advance.
/// The answer lands immediately; only the screen change waits.
pub fn select_answer(mut ctx: SurveyContext, key: QuestionKey, value: u8) {
    let applied = ctx
        .state
        .write()
        .apply(SurveyEvent::SelectAnswer { key, value });
    if applied {
        request_transition(ctx, SurveyEvent::AdvanceAfterAnswer, true);
    }
}

/// Stage a screen change behind the cross-fade. Requests made while another
/// transition is in flight are dropped, so rapid clicks cannot double-advance.
pub fn request_transition(mut ctx: SurveyContext, event: SurveyEvent, hold: bool) {
    if !ctx.phase.write().begin(event.clone(), hold) {
        tracing::debug!(?event, "transition dropped, another is pending");
        return;
    }
    spawn(async move {
        loop {
            let delay = ctx.phase.read().delay();
            let Some(delay) = delay else { break };
            tokio::time::sleep(delay).await;
            let pending = ctx.phase.write().step();
            if let Some(event) = pending {
                let mut state = ctx.state.write();
                let applied = state.apply(event.clone());
                if applied && event == SurveyEvent::Submit {
                    tracing::info!(response = ?state.response(), "survey submitted (local only)");
                }
                tracing::debug!(?event, applied, "transition applied");
            }
        }
    });
}
