use super::*;

#[test]
fn default_order_matches_session_start() {
    let o = Order::default();
    assert_eq!(o.base, BagelBase::Plain);
    assert!(!o.toasted);
    assert_eq!(o.shmear, Shmear::None);
    assert!(o.egg.is_none() && o.meat.is_none() && o.cheese.is_none());
    assert!(o.veggies.is_empty() && o.condiments.is_empty());
    assert!(!o.has_name());
    assert_eq!(o.name_color, NameColor::Red);
    assert_eq!(o.text_style, TextStyle::Colored);
}

#[test]
fn json_uses_camel_case_fields_and_kebab_case_keys() {
    let mut o = Order {
        base: BagelBase::WholeWheat,
        shmear: Shmear::GarlicHerb,
        cheese: Some(Cheese::PepperJack),
        customer_name: "Sam".to_string(),
        ..Order::default()
    };
    o.veggies.insert(Veggie::RedOnion);

    let json = o.to_json().unwrap();
    assert!(json.contains("\"base\":\"whole-wheat\""));
    assert!(json.contains("\"shmear\":\"garlic-herb\""));
    assert!(json.contains("\"cheese\":\"pepper-jack\""));
    assert!(json.contains("\"veggies\":[\"red-onion\"]"));
    assert!(json.contains("\"customerName\":\"Sam\""));
    assert!(json.contains("\"textStyle\":\"colored\""));
    assert!(!json.contains("\"egg\""));

    assert_eq!(Order::from_json(&json).unwrap(), o);
}

#[test]
fn duplicate_set_members_collapse_and_sort_canonically() {
    let o = Order::from_json(r#"{"veggies":["capers","tomato","capers","red-onion"]}"#).unwrap();
    let got: Vec<_> = o.veggies.iter().copied().collect();
    assert_eq!(got, vec![Veggie::RedOnion, Veggie::Tomato, Veggie::Capers]);
}

#[test]
fn missing_fields_take_defaults() {
    let o = Order::from_json(r#"{"base":"sesame"}"#).unwrap();
    assert_eq!(o.base, BagelBase::Sesame);
    assert_eq!(o.shmear, Shmear::None);
}

#[test]
fn hex_name_colors_are_accepted() {
    let o = Order::from_json(
        r##"{"customerName":"Ada","nameColor":"#4ECDC4","textStyle":"black"}"##,
    )
    .unwrap();
    assert_eq!(o.name_color, NameColor::Teal);

    let o = Order::from_json(r##"{"nameColor":"#ffeaa7"}"##).unwrap();
    assert_eq!(o.name_color, NameColor::Yellow);

    for color in NameColor::ALL {
        let json = format!(r#"{{"nameColor":"{}"}}"#, color.rgb());
        assert_eq!(Order::from_json(&json).unwrap().name_color, color);
    }
}

#[test]
fn unknown_option_keys_are_rejected() {
    let err = Order::from_json(r#"{"base":"pumpernickel"}"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn blank_names_do_not_count() {
    let o = Order {
        customer_name: "   ".to_string(),
        ..Order::default()
    };
    assert!(!o.has_name());

    let o = Order {
        customer_name: "  Ada ".to_string(),
        ..Order::default()
    };
    assert_eq!(o.customer_name(), Some("Ada"));
}

#[test]
fn long_and_multiline_names_round_trip() {
    let o = Order {
        customer_name: format!("{}\nJr.", "Bartholomew ".repeat(6)),
        ..Order::default()
    };
    assert_eq!(Order::from_json(&o.to_json().unwrap()).unwrap(), o);
}
