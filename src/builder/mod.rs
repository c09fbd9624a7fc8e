//! UI-independent builder core: catalog, settings, configuration tree and store.

pub mod block_type;
pub mod catalog;
pub mod inspector;
pub mod plan;
pub mod registry;
pub mod render;
pub mod settings;
pub mod store;
pub mod sync;
pub mod tree;

pub use block_type::{BlockType, Category, Screen};
pub use plan::{Plan, Receipt};
pub use render::{render, BlockView};
pub use settings::BlockSettings;
pub use store::{AddOptions, BuilderStore, Command, MoveDirection};
pub use tree::{AppConfig, BlockEntry, ThemeSettings, Visibility};
