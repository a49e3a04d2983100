pub mod session;

pub use crate::domain::model::{Cart, CartSnapshot, LineItem, SnapshotLine};
pub use crate::domain::ports::{CartView, ConfigProvider, Navigator};
pub use crate::utils::error::Result;
