use crate::core::{Cart, CartView, Navigator};
use crate::utils::error::Result;

/// A named mutation or UI action applied to the cart by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Increment(String),
    Decrement(String),
    Remove(String),
    Checkout,
    ContinueShopping,
}

impl Command {
    /// Parses one line of terminal input. The item name is the remainder of
    /// the line, so names may contain spaces.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim();
        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };

        match verb {
            "inc" | "+" if !rest.is_empty() => Some(Command::Increment(rest.to_string())),
            "dec" | "-" if !rest.is_empty() => Some(Command::Decrement(rest.to_string())),
            "rm" | "remove" if !rest.is_empty() => Some(Command::Remove(rest.to_string())),
            "checkout" if rest.is_empty() => Some(Command::Checkout),
            "continue" if rest.is_empty() => Some(Command::ContinueShopping),
            _ => None,
        }
    }
}

/// Owns the cart and funnels every write through the named commands.
/// The view only ever receives derived snapshots.
pub struct CartSession<V: CartView, N: Navigator> {
    cart: Cart,
    view: V,
    navigator: N,
    listing_url: String,
}

impl<V: CartView, N: Navigator> CartSession<V, N> {
    pub fn new(cart: Cart, view: V, navigator: N, listing_url: String) -> Self {
        Self {
            cart,
            view,
            navigator,
            listing_url,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Renders the current cart without mutating it.
    pub fn render_current(&self) -> Result<()> {
        let snapshot = self.cart.snapshot()?;
        self.view.render(&snapshot);
        Ok(())
    }

    pub fn handle(&mut self, command: Command) -> Result<()> {
        tracing::debug!("Handling command: {:?}", command);

        match command {
            Command::Increment(name) => self.apply(|cart| cart.increment(&name)),
            Command::Decrement(name) => self.apply(|cart| cart.decrement(&name)),
            Command::Remove(name) => self.apply(|cart| cart.remove(&name)),
            Command::Checkout => {
                // Checkout never mutates the cart and never fails.
                self.view.notify("Checkout is not yet available");
                Ok(())
            }
            Command::ContinueShopping => {
                self.navigator.go_to_listing(&self.listing_url);
                Ok(())
            }
        }
    }

    /// Applies a mutation transactionally: the new state is committed and
    /// rendered only once its snapshot derives cleanly, so a command that
    /// trips a data-integrity failure does not partially apply.
    fn apply(&mut self, mutate: impl FnOnce(&mut Cart) -> bool) -> Result<()> {
        let mut next = self.cart.clone();
        if !mutate(&mut next) {
            return Ok(());
        }

        match next.snapshot() {
            Ok(snapshot) => {
                self.cart = next;
                self.view.render(&snapshot);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Cart update rejected: {}", e);
                self.view.show_error(&e.to_string());
                Err(e)
            }
        }
    }
}
