//! Client-side routes.
//!
//! Both patterns mount the same wizard. The token segment is accepted but
//! not consumed anywhere yet; it is the hand-off point for a future backend
//! integration, so no format validation is applied.

use dioxus::prelude::*;

use crate::components::survey_page::SurveyPage;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/survey/:token")]
    TokenedSurvey { token: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        SurveyPage {}
    }
}

#[component]
fn TokenedSurvey(token: String) -> Element {
    rsx! {
        SurveyPage { token }
    }
}
