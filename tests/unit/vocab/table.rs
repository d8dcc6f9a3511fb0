use std::collections::HashSet;

use super::*;

#[test]
fn keys_are_unique_within_each_category() {
    let mut seen = HashSet::new();
    for e in VOCABULARY {
        assert!(
            seen.insert((e.category, e.key)),
            "duplicate vocabulary key {:?}/{}",
            e.category,
            e.key
        );
    }
}

#[test]
fn unknown_keys_fall_back_to_raw_key_and_gray() {
    assert_eq!(display_name(Category::Veggie, "kale"), "kale");
    assert_eq!(rendered_name(Category::Veggie, "kale"), "kale");
    assert_eq!(display_color(Category::Veggie, "kale"), FALLBACK_COLOR);
    assert_eq!(FALLBACK_COLOR.to_hex(), "#666666");
}

#[test]
fn lookup_is_scoped_by_category() {
    // "pepper" is a condiment; "pepper-jack" is a cheese.
    assert!(lookup(Category::Condiment, "pepper").is_some());
    assert!(lookup(Category::Cheese, "pepper").is_none());
    assert_eq!(
        display_name(Category::Cheese, "pepper-jack"),
        "Pepper Jack Cheese"
    );
}

#[test]
fn flavored_cream_cheeses_are_hand_wrapped_and_others_are_not() {
    for e in VOCABULARY.iter().filter(|e| e.category == Category::Shmear) {
        let flavored = e.name.ends_with(" Cream Cheese");
        assert_eq!(e.wrapped.is_some(), flavored, "{}", e.key);
        if let Some(w) = e.wrapped {
            assert_eq!(w.replace('\n', " "), e.name);
            assert!(w.ends_with("\nCream Cheese"));
        }
    }
    assert_eq!(
        lookup(Category::Shmear, "plain-cream-cheese")
            .unwrap()
            .rendered(),
        "Cream Cheese"
    );
}

#[test]
fn table_colors_match_the_shirt_palette() {
    assert_eq!(display_color(Category::Meat, "ham").to_hex(), "#ED5075");
    assert_eq!(display_color(Category::Base, "raisin").to_hex(), "#380A4E");
    assert_eq!(display_color(Category::Condiment, "salt"), Rgb8::WHITE);
}
