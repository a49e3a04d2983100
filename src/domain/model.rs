use serde::{Deserialize, Serialize};

use crate::utils::error::{CartError, Result};

/// One product entry in the cart, identified by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Display-only reference (URL or path); never used in calculations.
    #[serde(default)]
    pub image: String,
    pub cost: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, image: impl Into<String>, cost: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            cost,
            quantity,
        }
    }

    /// Cost contribution of this line, rounded to cents.
    ///
    /// Fails with [`CartError::DataIntegrity`] when `cost` is not a finite
    /// non-negative number or `quantity` is zero; invalid data must never be
    /// silently coerced into the total.
    pub fn subtotal(&self) -> Result<f64> {
        self.check_integrity()?;
        Ok(round_to_cents(self.quantity as f64 * self.cost))
    }

    fn check_integrity(&self) -> Result<()> {
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(CartError::DataIntegrity {
                name: self.name.clone(),
                detail: format!("cost {} is not a valid non-negative number", self.cost),
            });
        }
        if self.quantity == 0 {
            return Err(CartError::DataIntegrity {
                name: self.name.clone(),
                detail: "quantity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Ordered cart contents. `name` is the identity: no two items share one,
/// and every mutation addresses items by it. Mutation on a name that is not
/// present is a silent no-op, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart by merging each item in turn, so duplicate names in the
    /// input collapse into one entry.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inbound "add to cart" event. An existing entry with the same name has
    /// its quantity bumped by the incoming quantity; otherwise the item is
    /// appended, preserving insertion order.
    pub fn add(&mut self, item: LineItem) {
        match self.items.iter_mut().find(|i| i.name == item.name) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    /// Increments the quantity of the named item. No upper bound.
    /// Returns whether the cart changed.
    pub fn increment(&mut self, name: &str) -> bool {
        match self.items.iter_mut().find(|i| i.name == name) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => {
                tracing::debug!("increment on missing item '{}', ignoring", name);
                false
            }
        }
    }

    /// Decrements the quantity of the named item. A decrement at quantity 1
    /// removes the item entirely; a resident quantity of 0 must never exist.
    /// Returns whether the cart changed.
    pub fn decrement(&mut self, name: &str) -> bool {
        let Some(index) = self.items.iter().position(|i| i.name == name) else {
            tracing::debug!("decrement on missing item '{}', ignoring", name);
            return false;
        };

        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Removes the named item. Idempotent: removing an absent name is a
    /// no-op. Returns whether the cart changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.name != name);
        before != self.items.len()
    }

    /// Sum of all subtotals, rounded to cents. Zero for an empty cart.
    pub fn total_amount(&self) -> Result<f64> {
        let mut total = 0.0;
        for item in &self.items {
            item.check_integrity()?;
            total += item.quantity as f64 * item.cost;
        }
        Ok(round_to_cents(total))
    }

    /// Sum of all quantities. Zero for an empty cart.
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Derives the read-only state the view consumes: ordered lines with
    /// their subtotals plus the two totals, computed once here rather than
    /// per rendered line.
    pub fn snapshot(&self) -> Result<CartSnapshot> {
        let lines = self
            .items
            .iter()
            .map(|item| {
                Ok(SnapshotLine {
                    name: item.name.clone(),
                    image: item.image.clone(),
                    cost: item.cost,
                    quantity: item.quantity,
                    subtotal: item.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CartSnapshot {
            total_amount: self.total_amount()?,
            total_item_count: self.total_item_count(),
            lines,
        })
    }
}

/// One rendered cart line: the item fields plus its derived subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotLine {
    pub name: String,
    pub image: String,
    pub cost: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Owned, derived view of the cart. The view layer only ever sees this;
/// it can never reach the live item list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<SnapshotLine>,
    pub total_amount: f64,
    pub total_item_count: u32,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
