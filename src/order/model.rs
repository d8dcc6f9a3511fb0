use std::collections::BTreeSet;

use crate::{
    foundation::error::{BagelError, BagelResult},
    order::options::{
        BagelBase, Cheese, Condiment, EggStyle, Meat, NameColor, Shmear, TextStyle, Veggie,
    },
};

/// The complete customization for one session.
///
/// Set-valued fields are `BTreeSet`s so they can never hold duplicates and always iterate in
/// canonical category order, independent of the order the user picked them in.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub base: BagelBase,
    pub toasted: bool,
    pub shmear: Shmear,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egg: Option<EggStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meat: Option<Meat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheese: Option<Cheese>,
    pub veggies: BTreeSet<Veggie>,
    pub condiments: BTreeSet<Condiment>,
    pub customer_name: String,
    pub name_color: NameColor,
    pub text_style: TextStyle,
}

impl Order {
    /// Trimmed customer name, or `None` when blank.
    pub fn customer_name(&self) -> Option<&str> {
        let name = self.customer_name.trim();
        (!name.is_empty()).then_some(name)
    }

    pub fn has_name(&self) -> bool {
        self.customer_name().is_some()
    }

    pub fn from_json(json: &str) -> BagelResult<Self> {
        serde_json::from_str(json).map_err(|e| BagelError::serde(e.to_string()))
    }

    pub fn to_json(&self) -> BagelResult<String> {
        serde_json::to_string(self).map_err(|e| BagelError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/order/model.rs"]
mod tests;
