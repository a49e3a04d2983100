use std::fs;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::model::{Cart, LineItem};
use crate::utils::error::{CartError, Result};

/// TOML seed files list items as `[[item]]` tables; JSON seed files are a
/// bare array of objects.
#[derive(Debug, Deserialize)]
struct TomlSeed {
    #[serde(default)]
    item: Vec<Value>,
}

/// Loads a seed file and folds its records into a cart via `Cart::add`,
/// so duplicate names merge rather than violating name uniqueness.
pub fn seed_cart(path: &str) -> Result<Cart> {
    let raw = fs::read_to_string(path)?;

    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str());
    let records = match extension {
        Some("json") => serde_json::from_str::<Vec<Value>>(&raw)?,
        Some("toml") => toml::from_str::<TomlSeed>(&raw)?.item,
        _ => {
            return Err(CartError::InvalidConfigValueError {
                field: "seed_file".to_string(),
                value: path.to_string(),
                reason: "Unsupported seed file extension. Allowed extensions: json, toml"
                    .to_string(),
            })
        }
    };

    let mut cart = Cart::new();
    for record in &records {
        cart.add(line_item_from_value(record)?);
    }

    tracing::info!(
        "Seeded cart with {} line items from {}",
        cart.items().len(),
        path
    );
    Ok(cart)
}

/// Field extraction happens against loosely-typed values so that a
/// non-numeric `cost` or `quantity` surfaces as a data-integrity error
/// rather than being coerced or swallowed.
fn line_item_from_value(value: &Value) -> Result<LineItem> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| CartError::DataIntegrity {
            name: "<unnamed>".to_string(),
            detail: "missing or empty name".to_string(),
        })?;

    let image = value
        .get("image")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let cost = value
        .get("cost")
        .and_then(Value::as_f64)
        .ok_or_else(|| CartError::DataIntegrity {
            name: name.to_string(),
            detail: format!(
                "cost {} is not a number",
                value.get("cost").unwrap_or(&Value::Null)
            ),
        })?;
    if cost < 0.0 {
        return Err(CartError::DataIntegrity {
            name: name.to_string(),
            detail: format!("cost {} is negative", cost),
        });
    }

    // Items entering the cart default to quantity 1.
    let quantity = match value.get("quantity") {
        None => 1,
        Some(q) => q
            .as_u64()
            .and_then(|q| u32::try_from(q).ok())
            .filter(|q| *q >= 1)
            .ok_or_else(|| CartError::DataIntegrity {
                name: name.to_string(),
                detail: format!("quantity {} is not a positive integer", q),
            })?,
    };

    Ok(LineItem::new(name, image, cost, quantity))
}
