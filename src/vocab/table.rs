use std::borrow::Cow;

use crate::foundation::core::Rgb8;

/// Neutral gray used for keys the table does not know.
pub const FALLBACK_COLOR: Rgb8 = Rgb8::from_u32(0x666666);

/// Color of the base line when the base key itself is unknown.
pub const FALLBACK_BASE_COLOR: Rgb8 = Rgb8::from_u32(0x8B4513);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Base,
    Shmear,
    Egg,
    Meat,
    Cheese,
    Veggie,
    Condiment,
}

/// One selectable option value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VocabEntry {
    pub category: Category,
    pub key: &'static str,
    /// One-line display name, used by the summary and as the default rendered text.
    pub name: &'static str,
    /// Hand-wrapped rendered text for names that are too wide for a single shirt line.
    pub wrapped: Option<&'static str>,
    pub color: Rgb8,
}

impl VocabEntry {
    /// Text as painted on the shirt.
    pub fn rendered(&self) -> &'static str {
        self.wrapped.unwrap_or(self.name)
    }
}

const fn entry(
    category: Category,
    key: &'static str,
    name: &'static str,
    color: u32,
) -> VocabEntry {
    VocabEntry {
        category,
        key,
        name,
        wrapped: None,
        color: Rgb8::from_u32(color),
    }
}

const fn wrapped(
    category: Category,
    key: &'static str,
    name: &'static str,
    wrapped: &'static str,
    color: u32,
) -> VocabEntry {
    VocabEntry {
        category,
        key,
        name,
        wrapped: Some(wrapped),
        color: Rgb8::from_u32(color),
    }
}

use Category::{Base, Cheese, Condiment, Egg, Meat, Shmear, Veggie};

/// Every option value the configurator offers, grouped by category in canonical order.
pub static VOCABULARY: &[VocabEntry] = &[
    entry(Base, "plain", "Bagel", 0xD2B48C),
    entry(Base, "sesame", "Sesame", 0xDEB887),
    entry(Base, "raisin", "Raisin", 0x380A4E),
    entry(Base, "everything", "Everything", 0xA0522D),
    entry(Base, "whole-wheat", "Whole Wheat", 0x8B7355),
    entry(Shmear, "plain-cream-cheese", "Cream Cheese", 0xF5F5DC),
    wrapped(
        Shmear,
        "scallion",
        "Scallion Cream Cheese",
        "Scallion\nCream Cheese",
        0x90EE90,
    ),
    wrapped(
        Shmear,
        "tofu",
        "Tofu Cream Cheese",
        "Tofu\nCream Cheese",
        0xFFFACD,
    ),
    wrapped(
        Shmear,
        "strawberry",
        "Strawberry Cream Cheese",
        "Strawberry\nCream Cheese",
        0xFFB6C1,
    ),
    wrapped(
        Shmear,
        "garlic-herb",
        "Garlic Herb Cream Cheese",
        "Garlic Herb\nCream Cheese",
        0x9ACD32,
    ),
    entry(Shmear, "butter", "Butter", 0xFFD700),
    entry(Shmear, "peanut-butter", "Peanut Butter", 0xD2691E),
    entry(Egg, "egg", "Egg", 0xFFA500),
    entry(Egg, "scrambled", "Scrambled Eggs", 0xFFA500),
    entry(Egg, "fried", "Fried Egg", 0xFFA500),
    entry(Egg, "over-easy", "Over Easy Egg", 0xFFA500),
    entry(Meat, "ham", "Ham", 0xED5075),
    entry(Meat, "sausage", "Sausage", 0xCD853F),
    entry(Meat, "bacon", "Bacon", 0xD2691E),
    entry(Meat, "turkey", "Turkey", 0xD2B48C),
    entry(Meat, "lox", "Lox", 0xFFA07A),
    entry(Cheese, "american", "American Cheese", 0xFFEB70),
    entry(Cheese, "swiss", "Swiss Cheese", 0xFFEB70),
    entry(Cheese, "cheddar", "Cheddar Cheese", 0xFFEB70),
    entry(Cheese, "pepper-jack", "Pepper Jack Cheese", 0xFFEB70),
    entry(Veggie, "red-onion", "Red Onion", 0xB19CD9),
    entry(Veggie, "lettuce", "Lettuce", 0x90EE90),
    entry(Veggie, "tomato", "Tomato", 0xFF6347),
    entry(Veggie, "jalapenos", "Jalapeños", 0x32CD32),
    entry(Veggie, "avocado", "Avocado", 0x9ACD32),
    entry(Veggie, "cucumber", "Cucumber", 0x98FB98),
    entry(Veggie, "pickles", "Pickles", 0xADFF2F),
    entry(Veggie, "capers", "Capers", 0x556B2F),
    entry(Condiment, "salt", "Salt", 0xFFFFFF),
    entry(Condiment, "pepper", "Pepper", 0x2F2F2F),
    entry(Condiment, "ketchup", "Ketchup", 0xC21807),
    entry(Condiment, "mayo", "Mayo", 0xF5F5DC),
];

pub fn lookup(category: Category, key: &str) -> Option<&'static VocabEntry> {
    VOCABULARY
        .iter()
        .find(|e| e.category == category && e.key == key)
}

/// Display name for `key`, or the raw key when the table has no entry.
pub fn display_name(category: Category, key: &str) -> Cow<'static, str> {
    match lookup(category, key) {
        Some(e) => Cow::Borrowed(e.name),
        None => Cow::Owned(key.to_string()),
    }
}

/// Rendered (possibly hand-wrapped) text for `key`, or the raw key when unknown.
pub fn rendered_name(category: Category, key: &str) -> Cow<'static, str> {
    match lookup(category, key) {
        Some(e) => Cow::Borrowed(e.rendered()),
        None => Cow::Owned(key.to_string()),
    }
}

pub fn display_color(category: Category, key: &str) -> Rgb8 {
    lookup(category, key).map_or(FALLBACK_COLOR, |e| e.color)
}

/// Implemented by every typed option so it can be resolved against [`VOCABULARY`].
pub trait OptionKey: Copy {
    const CATEGORY: Category;

    fn key(self) -> &'static str;

    fn entry(self) -> Option<&'static VocabEntry> {
        lookup(Self::CATEGORY, self.key())
    }

    fn display_name(self) -> Cow<'static, str> {
        display_name(Self::CATEGORY, self.key())
    }

    fn rendered_name(self) -> Cow<'static, str> {
        rendered_name(Self::CATEGORY, self.key())
    }

    fn color(self) -> Rgb8 {
        display_color(Self::CATEGORY, self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vocab/table.rs"]
mod tests;
