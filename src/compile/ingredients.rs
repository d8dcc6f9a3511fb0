use crate::{
    compile::base_line::base_line_text,
    foundation::core::Rgb8,
    order::{model::Order, options::BagelBase},
    vocab::table::{FALLBACK_BASE_COLOR, OptionKey, VocabEntry},
};

/// Line-break marker embedded in multi-line display text.
pub const LINE_BREAK: char = '\n';

/// Cheese names at least this long wrap before the word "Cheese".
pub const CHEESE_WRAP_MIN_CHARS: usize = 13;

/// Substring that marks pale cream-cheese text needing an outline stroke.
pub const OUTLINE_MARKER: &str = "Cream Cheese";

/// One rendered line-group.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IngredientEntry {
    pub display_text: String,
    pub color: Rgb8,
    /// Draw a trailing " &" after this entry's final line.
    pub join_next: bool,
    pub is_base_line: bool,
}

impl IngredientEntry {
    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.display_text.split(LINE_BREAK)
    }

    pub fn line_count(&self) -> usize {
        self.display_text.matches(LINE_BREAK).count() + 1
    }

    /// Whether the text gets the light outline stroke beneath its fill.
    pub fn outlined(&self) -> bool {
        self.display_text.contains(OUTLINE_MARKER)
    }
}

/// Compiled entries for one order, plus the base the layout engine sizes against.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IngredientList {
    pub base: BagelBase,
    pub entries: Vec<IngredientEntry>,
}

impl IngredientList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientEntry> {
        self.entries.iter()
    }

    pub fn base_line(&self) -> Option<&IngredientEntry> {
        self.entries.last().filter(|e| e.is_base_line)
    }

    pub fn total_lines(&self) -> usize {
        self.entries.iter().map(IngredientEntry::line_count).sum()
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a IngredientEntry;
    type IntoIter = std::slice::Iter<'a, IngredientEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn topping<T: OptionKey>(opt: T) -> (String, Rgb8) {
    (opt.rendered_name().into_owned(), opt.color())
}

/// Break long cheese names onto two lines, "Pepper Jack\nCheese".
fn wrap_cheese_name(name: String) -> String {
    if name.chars().count() >= CHEESE_WRAP_MIN_CHARS {
        name.replacen(" Cheese", "\nCheese", 1)
    } else {
        name
    }
}

/// Turn an order into its ordered display entries.
///
/// Entries come in fixed category order (meat, egg, cheese, veggies, condiments, shmear) and
/// always end with exactly one base line. Every entry but the last joins to the next with "&".
pub fn compile(order: &Order) -> IngredientList {
    let mut toppings = Vec::<(String, Rgb8)>::new();

    toppings.extend(order.meat.map(topping));
    toppings.extend(order.egg.map(topping));
    if let Some(cheese) = order.cheese {
        let (name, color) = topping(cheese);
        toppings.push((wrap_cheese_name(name), color));
    }
    toppings.extend(order.veggies.iter().copied().map(topping));
    toppings.extend(order.condiments.iter().copied().map(topping));
    if !order.shmear.is_none() {
        toppings.push(topping(order.shmear));
    }

    let has_other = !toppings.is_empty();
    let mut entries: Vec<IngredientEntry> = toppings
        .into_iter()
        .map(|(display_text, color)| IngredientEntry {
            display_text,
            color,
            join_next: true,
            is_base_line: false,
        })
        .collect();

    entries.push(IngredientEntry {
        display_text: base_line_text(order.base, order.toasted, has_other),
        color: order
            .base
            .entry()
            .map_or(FALLBACK_BASE_COLOR, |e: &VocabEntry| e.color),
        join_next: false,
        is_base_line: true,
    });

    IngredientList {
        base: order.base,
        entries,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/ingredients.rs"]
mod tests;
