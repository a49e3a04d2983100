use crate::domain::model::CartSnapshot;
use crate::domain::ports::CartView;

/// Renders cart snapshots as plain text on stdout. Currency formatting
/// lives here, not in the model.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl CartView for TerminalView {
    fn render(&self, snapshot: &CartSnapshot) {
        println!();
        println!("Your Shopping Cart");

        if snapshot.is_empty() {
            println!("Your cart is empty.");
            return;
        }

        for line in &snapshot.lines {
            println!(
                "  {} x{} @ ${:.2} = ${:.2}",
                line.name, line.quantity, line.cost, line.subtotal
            );
        }
        println!(
            "Total ({} items): ${:.2}",
            snapshot.total_item_count, snapshot.total_amount
        );
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn show_error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
