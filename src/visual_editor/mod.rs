//! Dioxus front end: block library, device canvas, inspector and configuration pages.

mod block_view;
mod component;
mod configuration;
pub mod platform;
mod settings_editor;

pub use component::{dispatch, VisualEditor, BUILDER};
pub use configuration::ConfigurationPage;
