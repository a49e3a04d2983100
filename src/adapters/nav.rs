use crate::domain::ports::Navigator;

/// Stand-in for a browser redirect: announces the target instead of
/// changing any host-environment global.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl TerminalNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for TerminalNavigator {
    fn go_to_listing(&self, url: &str) {
        tracing::info!("Navigating to plant listing: {}", url);
        println!("Continuing shopping at {}", url);
    }
}
