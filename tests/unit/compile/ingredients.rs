use super::*;
use crate::order::options::{Cheese, Condiment, EggStyle, Meat, Shmear, Veggie};

fn texts(list: &IngredientList) -> Vec<&str> {
    list.iter().map(|e| e.display_text.as_str()).collect()
}

#[test]
fn category_order_is_fixed() {
    let mut o = Order {
        shmear: Shmear::Butter,
        egg: Some(EggStyle::Fried),
        meat: Some(Meat::Ham),
        cheese: Some(Cheese::Swiss),
        ..Order::default()
    };
    o.condiments.insert(Condiment::Ketchup);
    o.veggies.insert(Veggie::Tomato);

    assert_eq!(
        texts(&compile(&o)),
        vec![
            "Ham",
            "Fried Egg",
            "Swiss Cheese",
            "Tomato",
            "Ketchup",
            "Butter",
            "on a Bagel"
        ]
    );
}

#[test]
fn veggies_render_in_canonical_order_regardless_of_selection_order() {
    let mut a = Order::default();
    for v in [Veggie::Capers, Veggie::Avocado, Veggie::RedOnion] {
        a.veggies.insert(v);
    }
    let mut b = Order::default();
    for v in [Veggie::RedOnion, Veggie::Capers, Veggie::Avocado] {
        b.veggies.insert(v);
    }
    assert_eq!(compile(&a), compile(&b));
    assert_eq!(
        texts(&compile(&a))[..3],
        ["Red Onion", "Avocado", "Capers"]
    );
}

#[test]
fn cheese_wraps_only_at_threshold() {
    let wrap = |c| {
        let o = Order {
            cheese: Some(c),
            ..Order::default()
        };
        compile(&o).entries[0].display_text.clone()
    };
    // "Swiss Cheese" is 12 characters.
    assert_eq!(wrap(Cheese::Swiss), "Swiss Cheese");
    assert_eq!(wrap(Cheese::American), "American\nCheese");
    assert_eq!(wrap(Cheese::Cheddar), "Cheddar\nCheese");
    assert_eq!(wrap(Cheese::PepperJack), "Pepper Jack\nCheese");
}

#[test]
fn line_count_counts_breaks() {
    let e = IngredientEntry {
        display_text: "a\nb\nc".to_string(),
        color: Rgb8::BLACK,
        join_next: false,
        is_base_line: false,
    };
    assert_eq!(e.line_count(), 3);
    assert_eq!(e.lines().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn outline_applies_to_every_cream_cheese() {
    for shmear in Shmear::ALL {
        if shmear.is_none() {
            continue;
        }
        let o = Order {
            shmear,
            ..Order::default()
        };
        let list = compile(&o);
        let want = matches!(
            shmear,
            Shmear::PlainCreamCheese
                | Shmear::Scallion
                | Shmear::Tofu
                | Shmear::Strawberry
                | Shmear::GarlicHerb
        );
        assert_eq!(list.entries[0].outlined(), want, "{shmear:?}");
        assert!(!list.entries[1].outlined());
    }
}

#[test]
fn shmear_is_immediately_before_the_base_line() {
    let mut o = Order {
        shmear: Shmear::Tofu,
        meat: Some(Meat::Turkey),
        ..Order::default()
    };
    o.condiments.insert(Condiment::Mayo);
    let list = compile(&o);
    let n = list.len();
    assert_eq!(list.entries[n - 2].display_text, "Tofu\nCream Cheese");
    assert!(list.entries[n - 1].is_base_line);
}

#[test]
fn base_line_uses_base_color() {
    let list = compile(&Order::default());
    assert_eq!(list.base_line().unwrap().color.to_hex(), "#D2B48C");
    assert_eq!(list.total_lines(), 1);
}

#[test]
fn entry_serializes_with_hex_color() {
    let list = compile(&Order::default());
    let json = serde_json::to_string(&list).unwrap();
    assert!(json.contains("\"color\":\"#D2B48C\""));
    assert!(json.contains("\"is_base_line\":true"));
}
