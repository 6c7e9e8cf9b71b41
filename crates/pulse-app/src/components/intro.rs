//! Intro screen: survey pitch, trust badges, start button.

use dioxus::prelude::*;
use pulse_core::SurveyEvent;

use crate::state::{request_transition, SurveyContext};

#[component]
pub fn IntroCard() -> Element {
    let ctx = use_context::<SurveyContext>();

    rsx! {
        div { class: "intro-card",
            div { class: "intro-icon-wrap",
                span { class: "intro-icon", "📋" }
            }
            h1 { class: "intro-title", "今月のコンディションを教えてください" }
            p { class: "intro-desc",
                "3つの質問にお天気マークで答えるだけ。"
                br {}
                "所要時間は約1分です。"
            }
            div { class: "trust-badges",
                TrustItem { icon: "🔒", text: "人事担当のみ閲覧" }
                TrustItem { icon: "🚫", text: "評価には影響しません" }
                TrustItem { icon: "⏱️", text: "約1分で完了" }
            }
            button {
                class: "start-button",
                onclick: move |_| request_transition(ctx, SurveyEvent::Start, false),
                "回答をはじめる"
                span { class: "start-arrow", "→" }
            }
            p { class: "intro-deadline", "回答期限：2026年2月14日（土）" }
        }
    }
}

#[component]
fn TrustItem(icon: &'static str, text: &'static str) -> Element {
    rsx! {
        div { class: "trust-item",
            span { class: "trust-icon", "{icon}" }
            span { "{text}" }
        }
    }
}
