//! Visual builder for mobile storefront layouts.
//!
//! The [`builder`] module holds the UI-independent core (block catalog,
//! typed settings, configuration tree, store); [`visual_editor`] and [`app`]
//! put a Dioxus front end on top of it.

pub mod app;
pub mod builder;
pub mod config;
pub mod error;
pub mod visual_editor;

pub use builder::{BlockType, BuilderStore, Command, Screen};
pub use config::BuilderConfig;
pub use error::{BuilderError, Result};
