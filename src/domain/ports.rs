use crate::domain::model::CartSnapshot;

/// Outbound port for the presentation layer. Implementations receive derived
/// snapshots and user-facing notices; they never mutate cart state.
pub trait CartView {
    /// Presents the current cart. An empty snapshot must be shown as an
    /// explicit "cart is empty" affordance, not a blank list.
    fn render(&self, snapshot: &CartSnapshot);

    /// Informational notice, e.g. "checkout not yet available".
    fn notify(&self, message: &str);

    /// Generic failure notice for errors the session propagates.
    fn show_error(&self, message: &str);
}

/// Navigation capability injected into the session so the model never
/// touches host-environment globals directly.
pub trait Navigator {
    fn go_to_listing(&self, url: &str);
}

pub trait ConfigProvider {
    fn listing_url(&self) -> &str;
    fn seed_file(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}
