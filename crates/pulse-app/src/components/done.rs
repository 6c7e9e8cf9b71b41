//! Completion screen: thanks, final summary, demo reset.

use dioxus::prelude::*;
use pulse_core::SurveyEvent;

use crate::state::{request_transition, SurveyContext};

#[component]
pub fn DoneCard() -> Element {
    let ctx = use_context::<SurveyContext>();
    let comment = ctx.state.read().comment.clone();
    let has_comment = !comment.trim().is_empty();

    rsx! {
        div { class: "done-card",
            div { class: "done-icon-wrap",
                span { class: "done-icon", "🎉" }
            }
            h2 { class: "done-title", "回答ありがとうございました！" }
            p { class: "done-desc",
                "今月のサーベイは完了です。"
                br {}
                "いただいた回答は、職場環境の改善に役立てさせていただきます。"
            }

            div { class: "done-summary",
                super::summary::SummaryRows {}
                if has_comment {
                    div { class: "done-comment", "💬 {comment}" }
                }
            }

            p { class: "done-footer",
                "来月のサーベイは3月上旬にお届けします。"
                br {}
                "何かお困りのことがあれば、いつでも人事部までご相談ください。"
            }

            button {
                class: "reset-button",
                onclick: move |_| request_transition(ctx, SurveyEvent::Reset, false),
                "デモ: もう一度回答する"
            }
        }
    }
}
