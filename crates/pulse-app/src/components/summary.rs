//! Shared answer summary rendering.
//!
//! Each question's stored value is looked up in the weather table; a missing
//! answer renders an empty slot instead of failing. That path is unreachable
//! through the navigation guards, but the lookup stays total anyway.

use dioxus::prelude::*;
use pulse_core::{weather_by_value, QUESTIONS};

use crate::state::SurveyContext;

/// Compact per-question summary grid, shown on the comment screen.
#[component]
pub fn SummaryGrid() -> Element {
    let ctx = use_context::<SurveyContext>();
    let answers = ctx.state.read().answers.clone();

    rsx! {
        div { class: "summary-wrap",
            div { class: "summary-title", "回答内容の確認" }
            div { class: "summary-grid",
                for q in QUESTIONS.iter() {
                    {
                        let resolved = answers.get(q.key).and_then(weather_by_value);
                        rsx! {
                            div { key: "{q.key.as_str()}", class: "summary-item",
                                span { class: "summary-question", "{q.title}" }
                                div { class: "summary-answer",
                                    if let Some(option) = resolved {
                                        span { class: "summary-icon", "{option.icon}" }
                                        span { class: "summary-label", "{option.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Row-per-question summary, shown on the done screen.
#[component]
pub fn SummaryRows() -> Element {
    let ctx = use_context::<SurveyContext>();
    let answers = ctx.state.read().answers.clone();

    rsx! {
        for q in QUESTIONS.iter() {
            {
                let resolved = answers.get(q.key).and_then(weather_by_value);
                rsx! {
                    div { key: "{q.key.as_str()}", class: "summary-row",
                        span { class: "summary-row-question", "{q.title}" }
                        if let Some(option) = resolved {
                            span { class: "summary-row-icon", "{option.icon}" }
                            span { class: "summary-row-label", "{option.label}" }
                        }
                    }
                }
            }
        }
    }
}
