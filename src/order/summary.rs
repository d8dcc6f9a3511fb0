use crate::{order::model::Order, vocab::table::OptionKey};

/// Separator between the summary's top-level parts.
pub const PART_SEPARATOR: &str = " • ";
/// Separator between add-on names.
pub const ADD_ON_SEPARATOR: &str = " + ";

/// One-line order description used for confirmation and as the cart line-item label.
///
/// Parts, in order: base name, `Toasted`, shmear (unless none), then every add-on (egg, meat,
/// cheese, veggies, condiments) joined with [`ADD_ON_SEPARATOR`].
pub fn summary(order: &Order) -> String {
    let mut parts = Vec::<String>::with_capacity(4);
    parts.push(order.base.display_name().into_owned());

    if order.toasted {
        parts.push("Toasted".to_string());
    }

    if !order.shmear.is_none() {
        parts.push(order.shmear.display_name().into_owned());
    }

    let mut add_ons = Vec::<String>::new();
    add_ons.extend(order.egg.map(|e| e.display_name().into_owned()));
    add_ons.extend(order.meat.map(|m| m.display_name().into_owned()));
    add_ons.extend(order.cheese.map(|c| c.display_name().into_owned()));
    add_ons.extend(order.veggies.iter().map(|v| v.display_name().into_owned()));
    add_ons.extend(order.condiments.iter().map(|c| c.display_name().into_owned()));

    if !add_ons.is_empty() {
        parts.push(add_ons.join(ADD_ON_SEPARATOR));
    }

    parts.join(PART_SEPARATOR)
}

#[cfg(test)]
#[path = "../../tests/unit/order/summary.rs"]
mod tests;
