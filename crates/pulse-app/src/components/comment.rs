//! Comment screen: optional free-text input, answer review, submit.

use dioxus::prelude::*;
use pulse_core::SurveyEvent;

use crate::state::{request_transition, SurveyContext};

#[component]
pub fn CommentCard() -> Element {
    let mut ctx = use_context::<SurveyContext>();
    let comment = ctx.state.read().comment.clone();

    rsx! {
        div { class: "question-card",
            div { class: "question-header",
                span { class: "question-icon", "💬" }
                div {
                    div { class: "question-num", "任意" }
                    h2 { class: "question-title", "フリーコメント" }
                }
            }
            p { class: "question-desc",
                "仕事・チーム・健康などについて伝えたいことがあれば、自由にご記入ください。"
            }
            textarea {
                class: "comment-box",
                rows: "5",
                placeholder: "例: 最近チームの雰囲気が良くなっていると感じます...",
                value: "{comment}",
                oninput: move |evt| {
                    ctx.state.write().apply(SurveyEvent::SetComment(evt.value()));
                },
            }

            super::summary::SummaryGrid {}

            div { class: "question-nav",
                button {
                    class: "nav-back",
                    onclick: move |_| {
                        request_transition(ctx, SurveyEvent::BackToQuestions, false)
                    },
                    "← 質問に戻る"
                }
                div { class: "nav-spacer" }
                button {
                    class: "submit-button",
                    onclick: move |_| request_transition(ctx, SurveyEvent::Submit, false),
                    "回答を送信する ✓"
                }
            }
        }
    }
}
