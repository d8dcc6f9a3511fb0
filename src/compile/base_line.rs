use crate::{order::options::BagelBase, vocab::table::OptionKey};

/// Indefinite article by first-letter vowel check.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Terminal "on a ___ Bagel" text for `(base, toasted, has_other)`.
///
/// Plain, whole wheat and everything carry hand-authored phrasing chosen for where the line
/// breaks fall on the shirt; keep them as literal arms. Only the remaining bases go through the
/// generic article rule.
pub fn base_line_text(base: BagelBase, toasted: bool, has_other: bool) -> String {
    use BagelBase::{Everything, Plain, WholeWheat};

    let text = match (base, toasted, has_other) {
        (Plain, false, true) => "on a Bagel",
        (Plain, true, true) => "on a\nToasted Bagel",
        (Plain, false, false) => "Bagel",
        (Plain, true, false) => "Toasted Bagel",

        (WholeWheat, false, true) => "on a\nWhole Wheat Bagel",
        (WholeWheat, true, true) => "on a Toasted\nWhole Wheat Bagel",
        (WholeWheat, false, false) => "Whole Wheat Bagel",
        (WholeWheat, true, false) => "Toasted\nWhole Wheat Bagel",

        (Everything, false, true) => "on an\nEverything Bagel",
        (Everything, true, true) => "on a Toasted\nEverything Bagel",
        (Everything, false, false) => "Everything Bagel",
        (Everything, true, false) => "Toasted\nEverything Bagel",

        (other, toasted, has_other) => {
            return generic_base_line(&other.display_name(), toasted, has_other);
        }
    };
    text.to_string()
}

fn generic_base_line(name: &str, toasted: bool, has_other: bool) -> String {
    match (toasted, has_other) {
        (false, true) => format!("on {}\n{name} Bagel", indefinite_article(name)),
        (true, true) => format!("on {} Toasted\n{name} Bagel", indefinite_article("Toasted")),
        (false, false) => format!("{name} Bagel"),
        (true, false) => format!("Toasted\n{name} Bagel"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/base_line.rs"]
mod tests;
