// Adapters layer: concrete implementations for the ports (terminal view,
// navigation, catalog seed loading).

pub mod catalog;
pub mod nav;
pub mod view;

pub use catalog::seed_cart;
pub use nav::TerminalNavigator;
pub use view::TerminalView;
