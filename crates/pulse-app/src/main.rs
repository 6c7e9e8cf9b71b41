//! Entry point for the pulse survey desktop app.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod components;
mod route;
mod state;

const SURVEY_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("pulse_app=info,pulse_core=info")
        .init();

    tracing::info!("Starting pulse survey");

    // Optional window geometry from env (useful when tiling demo windows)
    let win_w = std::env::var("PULSE_WIN_W").ok().and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("PULSE_WIN_H").ok().and_then(|v| v.parse::<f64>().ok());

    let wb = WindowBuilder::new()
        .with_title("パルスサーベイ")
        .with_maximized(false)
        .with_inner_size(LogicalSize::new(win_w.unwrap_or(560.0), win_h.unwrap_or(780.0)));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"<style>{}</style>"#, SURVEY_CSS)),
        )
        .launch(components::app::App);
}
