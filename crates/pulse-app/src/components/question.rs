//! Survey screen: question tabs, the active question card, weather options,
//! and back/next navigation.

use dioxus::prelude::*;
use pulse_core::{question_at, SurveyEvent, QUESTIONS, QUESTION_COUNT, WEATHER_OPTIONS};

use crate::state::{request_transition, select_answer, SurveyContext};

#[component]
pub fn SurveyQuestions(index: usize) -> Element {
    let ctx = use_context::<SurveyContext>();

    let answers = ctx.state.read().answers.clone();
    let Some(question) = question_at(index) else {
        // Unreachable through the reducer guards; render nothing rather
        // than index out of bounds.
        return rsx! {};
    };

    let current_answered = answers.answered(question.key);
    let all_answered = answers.all_answered();
    let is_last = index + 1 == QUESTION_COUNT;

    rsx! {
        div {
            div { class: "question-tabs",
                for (i, q) in QUESTIONS.iter().enumerate() {
                    {
                        let done = answers.answered(q.key);
                        let class = match (i == index, done) {
                            (true, _) => "question-tab active",
                            (false, true) => "question-tab done",
                            (false, false) => "question-tab",
                        };
                        rsx! {
                            button {
                                key: "{q.key.as_str()}",
                                class: "{class}",
                                onclick: move |_| {
                                    request_transition(ctx, SurveyEvent::JumpToQuestion(i), false)
                                },
                                span { class: "tab-mark",
                                    if done { "✓" } else { "{q.num}" }
                                }
                                span { class: "tab-label", "{q.title}" }
                            }
                        }
                    }
                }
            }

            div { class: "question-card",
                div { class: "question-header",
                    span { class: "question-icon", "{question.icon}" }
                    div {
                        div { class: "question-num", "質問 {question.num}" }
                        h2 { class: "question-title", "{question.title}" }
                    }
                }
                p { class: "question-desc", "{question.description}" }

                div { class: "weather-grid",
                    for option in WEATHER_OPTIONS.iter() {
                        {
                            let selected = answers.get(question.key) == Some(option.value);
                            let card_style = if selected {
                                format!(
                                    "background: {bg}; border-color: {bg}; box-shadow: 0 8px 24px {bg}44;",
                                    bg = option.active_bg
                                )
                            } else {
                                format!(
                                    "background: {}; border-color: {};",
                                    option.bg, option.border
                                )
                            };
                            let label_color = if selected { option.active_text } else { "#475569" };
                            let key = question.key;
                            let value = option.value;
                            rsx! {
                                button {
                                    key: "{option.value}",
                                    class: if selected { "weather-card selected" } else { "weather-card" },
                                    style: "{card_style}",
                                    onclick: move |_| select_answer(ctx, key, value),
                                    span { class: "weather-icon", "{option.icon}" }
                                    span {
                                        class: "weather-label",
                                        style: "color: {label_color};",
                                        "{option.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "question-nav",
                    if index > 0 {
                        button {
                            class: "nav-back",
                            onclick: move |_| {
                                request_transition(ctx, SurveyEvent::PrevQuestion, false)
                            },
                            "← 前の質問"
                        }
                    }
                    div { class: "nav-spacer" }
                    if !is_last {
                        button {
                            class: "nav-next",
                            disabled: !current_answered,
                            onclick: move |_| {
                                request_transition(ctx, SurveyEvent::NextQuestion, false)
                            },
                            "次の質問 →"
                        }
                    } else {
                        button {
                            class: "nav-next",
                            disabled: !all_answered,
                            onclick: move |_| {
                                request_transition(ctx, SurveyEvent::ToComment, false)
                            },
                            "コメントへ →"
                        }
                    }
                }
            }
        }
    }
}
