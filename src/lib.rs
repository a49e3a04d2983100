pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{seed_cart, TerminalNavigator, TerminalView};
pub use crate::core::session::{CartSession, Command};
pub use domain::model::{Cart, CartSnapshot, LineItem, SnapshotLine};
pub use domain::ports::{CartView, ConfigProvider, Navigator};
pub use utils::error::{CartError, Result};
