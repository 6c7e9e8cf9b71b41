//! Root component: mounts the two-route shell.

use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
