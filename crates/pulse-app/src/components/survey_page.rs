//! Page chrome (header, fade wrapper, footer) and step dispatch.

use dioxus::prelude::*;
use pulse_core::WizardStep;

use crate::state::SurveyContext;

/// The whole wizard page. `token` comes from the `/survey/:token` route and
/// is reserved for a future backend hand-off.
#[component]
pub fn SurveyPage(token: Option<String>) -> Element {
    let ctx = SurveyContext::provide();

    use_hook(move || {
        if let Some(ref token) = token {
            tracing::debug!(%token, "survey opened with token (reserved, unused)");
        }
    });

    let (step, answered, progress) = {
        let state = ctx.state.read();
        (
            state.step,
            state.answers.answered_count(),
            state.answers.progress_percent(),
        )
    };
    let fade_in = !ctx.phase.read().is_fading();
    let on_survey = matches!(step, WizardStep::Survey { .. });

    rsx! {
        div { class: "page-wrapper",
            div { class: "bg-decor bg-decor-top" }
            div { class: "bg-decor bg-decor-bottom" }

            div { class: "page-container",
                header { class: "page-header",
                    div { class: "logo-row",
                        div { class: "logo-mark", "G" }
                        div {
                            div { class: "logo-title", "パルスサーベイ" }
                            div { class: "logo-sub", "2026年2月度" }
                        }
                    }
                    if on_survey {
                        div { class: "progress-wrap",
                            div { class: "progress-bar",
                                div {
                                    class: "progress-fill",
                                    style: "width: {progress}%;",
                                }
                            }
                            span { class: "progress-text", "{answered}/3" }
                        }
                    }
                }

                main {
                    class: if fade_in { "page-main" } else { "page-main faded" },
                    {
                        match step {
                            WizardStep::Intro => rsx! {
                                super::intro::IntroCard {}
                            },
                            WizardStep::Survey { index } => rsx! {
                                super::question::SurveyQuestions { index }
                            },
                            WizardStep::Comment => rsx! {
                                super::comment::CommentCard {}
                            },
                            WizardStep::Done => rsx! {
                                super::done::DoneCard {}
                            },
                        }
                    }
                }

                footer { class: "page-footer",
                    div { class: "footer-note",
                        "このサーベイは人事部が管理しています。回答内容は人事担当者のみが閲覧します。"
                    }
                    div { class: "footer-copyright",
                        "© 2026 社内パルスサーベイシステム"
                    }
                }
            }
        }
    }
}
