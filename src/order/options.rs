//! Typed option values for every order field.
//!
//! Serialized keys are kebab-case and double as the keys of the vocabulary table. `Ord` follows
//! declaration order, which is the canonical render order for set-valued fields.

use crate::foundation::core::Rgb8;
use crate::vocab::table::{Category, OptionKey};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BagelBase {
    #[default]
    Plain,
    Sesame,
    Raisin,
    Everything,
    WholeWheat,
}

impl BagelBase {
    pub const ALL: [Self; 5] = [
        Self::Plain,
        Self::Sesame,
        Self::Raisin,
        Self::Everything,
        Self::WholeWheat,
    ];
}

impl OptionKey for BagelBase {
    const CATEGORY: Category = Category::Base;

    fn key(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Sesame => "sesame",
            Self::Raisin => "raisin",
            Self::Everything => "everything",
            Self::WholeWheat => "whole-wheat",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Shmear {
    #[default]
    None,
    PlainCreamCheese,
    Scallion,
    Tofu,
    Strawberry,
    GarlicHerb,
    Butter,
    PeanutButter,
}

impl Shmear {
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::PlainCreamCheese,
        Self::Scallion,
        Self::Tofu,
        Self::Strawberry,
        Self::GarlicHerb,
        Self::Butter,
        Self::PeanutButter,
    ];

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl OptionKey for Shmear {
    const CATEGORY: Category = Category::Shmear;

    fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PlainCreamCheese => "plain-cream-cheese",
            Self::Scallion => "scallion",
            Self::Tofu => "tofu",
            Self::Strawberry => "strawberry",
            Self::GarlicHerb => "garlic-herb",
            Self::Butter => "butter",
            Self::PeanutButter => "peanut-butter",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EggStyle {
    Egg,
    Scrambled,
    Fried,
    OverEasy,
}

impl EggStyle {
    pub const ALL: [Self; 4] = [Self::Egg, Self::Scrambled, Self::Fried, Self::OverEasy];
}

impl OptionKey for EggStyle {
    const CATEGORY: Category = Category::Egg;

    fn key(self) -> &'static str {
        match self {
            Self::Egg => "egg",
            Self::Scrambled => "scrambled",
            Self::Fried => "fried",
            Self::OverEasy => "over-easy",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Meat {
    Ham,
    Sausage,
    Bacon,
    Turkey,
    Lox,
}

impl Meat {
    pub const ALL: [Self; 5] = [
        Self::Ham,
        Self::Sausage,
        Self::Bacon,
        Self::Turkey,
        Self::Lox,
    ];
}

impl OptionKey for Meat {
    const CATEGORY: Category = Category::Meat;

    fn key(self) -> &'static str {
        match self {
            Self::Ham => "ham",
            Self::Sausage => "sausage",
            Self::Bacon => "bacon",
            Self::Turkey => "turkey",
            Self::Lox => "lox",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Cheese {
    American,
    Swiss,
    Cheddar,
    PepperJack,
}

impl Cheese {
    pub const ALL: [Self; 4] = [Self::American, Self::Swiss, Self::Cheddar, Self::PepperJack];
}

impl OptionKey for Cheese {
    const CATEGORY: Category = Category::Cheese;

    fn key(self) -> &'static str {
        match self {
            Self::American => "american",
            Self::Swiss => "swiss",
            Self::Cheddar => "cheddar",
            Self::PepperJack => "pepper-jack",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Veggie {
    RedOnion,
    Lettuce,
    Tomato,
    Jalapenos,
    Avocado,
    Cucumber,
    Pickles,
    Capers,
}

impl Veggie {
    pub const ALL: [Self; 8] = [
        Self::RedOnion,
        Self::Lettuce,
        Self::Tomato,
        Self::Jalapenos,
        Self::Avocado,
        Self::Cucumber,
        Self::Pickles,
        Self::Capers,
    ];
}

impl OptionKey for Veggie {
    const CATEGORY: Category = Category::Veggie;

    fn key(self) -> &'static str {
        match self {
            Self::RedOnion => "red-onion",
            Self::Lettuce => "lettuce",
            Self::Tomato => "tomato",
            Self::Jalapenos => "jalapenos",
            Self::Avocado => "avocado",
            Self::Cucumber => "cucumber",
            Self::Pickles => "pickles",
            Self::Capers => "capers",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Condiment {
    Salt,
    Pepper,
    Ketchup,
    Mayo,
}

impl Condiment {
    pub const ALL: [Self; 4] = [Self::Salt, Self::Pepper, Self::Ketchup, Self::Mayo];
}

impl OptionKey for Condiment {
    const CATEGORY: Category = Category::Condiment;

    fn key(self) -> &'static str {
        match self {
            Self::Salt => "salt",
            Self::Pepper => "pepper",
            Self::Ketchup => "ketchup",
            Self::Mayo => "mayo",
        }
    }
}

/// Preset colors offered for the customer name line.
///
/// Serialized by name; the preset's `#RRGGBB` value (either case) is accepted on input.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum NameColor {
    #[default]
    #[serde(alias = "#FF6B6B", alias = "#ff6b6b")]
    Red,
    #[serde(alias = "#4ECDC4", alias = "#4ecdc4")]
    Teal,
    #[serde(alias = "#45B7D1", alias = "#45b7d1")]
    Blue,
    #[serde(alias = "#96CEB4", alias = "#96ceb4")]
    Green,
    #[serde(alias = "#FFEAA7", alias = "#ffeaa7")]
    Yellow,
}

impl NameColor {
    pub const ALL: [Self; 5] = [Self::Red, Self::Teal, Self::Blue, Self::Green, Self::Yellow];

    pub fn rgb(self) -> Rgb8 {
        match self {
            Self::Red => Rgb8::from_u32(0xFF6B6B),
            Self::Teal => Rgb8::from_u32(0x4ECDC4),
            Self::Blue => Rgb8::from_u32(0x45B7D1),
            Self::Green => Rgb8::from_u32(0x96CEB4),
            Self::Yellow => Rgb8::from_u32(0xFFEAA7),
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    /// Each ingredient in its own table color.
    #[default]
    Colored,
    /// Every ingredient in pure black.
    Black,
}
