use super::*;
use crate::order::options::{
    BagelBase, Cheese, Condiment, EggStyle, Meat, Shmear, Veggie,
};

#[test]
fn plain_default_is_just_bagel() {
    assert_eq!(summary(&Order::default()), "Bagel");
}

#[test]
fn full_order_lists_every_part() {
    let mut o = Order {
        base: BagelBase::Everything,
        toasted: true,
        shmear: Shmear::Scallion,
        egg: Some(EggStyle::Scrambled),
        meat: Some(Meat::Lox),
        cheese: Some(Cheese::PepperJack),
        ..Order::default()
    };
    o.veggies.insert(Veggie::Capers);
    o.veggies.insert(Veggie::RedOnion);
    o.condiments.insert(Condiment::Pepper);

    assert_eq!(
        summary(&o),
        "Everything • Toasted • Scallion Cream Cheese • \
         Scrambled Eggs + Lox + Pepper Jack Cheese + Red Onion + Capers + Pepper"
    );
}

#[test]
fn summary_never_contains_render_line_breaks() {
    let o = Order {
        base: BagelBase::WholeWheat,
        shmear: Shmear::GarlicHerb,
        ..Order::default()
    };
    let s = summary(&o);
    assert_eq!(s, "Whole Wheat • Garlic Herb Cream Cheese");
    assert!(!s.contains('\n'));
}
