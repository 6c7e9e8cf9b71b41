//! Wizard UI components.

pub mod app;
pub mod comment;
pub mod done;
pub mod intro;
pub mod question;
pub mod summary;
pub mod survey_page;
