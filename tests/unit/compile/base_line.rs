use super::*;

#[test]
fn article_follows_first_letter() {
    assert_eq!(indefinite_article("Everything"), "an");
    assert_eq!(indefinite_article("onion"), "an");
    assert_eq!(indefinite_article("Sesame"), "a");
    assert_eq!(indefinite_article("Toasted"), "a");
    assert_eq!(indefinite_article(""), "a");
}

#[test]
fn full_lookup_table() {
    use BagelBase::*;

    let cases: &[(BagelBase, bool, bool, &str)] = &[
        (Plain, false, true, "on a Bagel"),
        (Plain, true, true, "on a\nToasted Bagel"),
        (Plain, false, false, "Bagel"),
        (Plain, true, false, "Toasted Bagel"),
        (Sesame, false, true, "on a\nSesame Bagel"),
        (Sesame, true, true, "on a Toasted\nSesame Bagel"),
        (Sesame, false, false, "Sesame Bagel"),
        (Sesame, true, false, "Toasted\nSesame Bagel"),
        (Raisin, false, true, "on a\nRaisin Bagel"),
        (Raisin, true, true, "on a Toasted\nRaisin Bagel"),
        (Raisin, false, false, "Raisin Bagel"),
        (Raisin, true, false, "Toasted\nRaisin Bagel"),
        (Everything, false, true, "on an\nEverything Bagel"),
        (Everything, true, true, "on a Toasted\nEverything Bagel"),
        (Everything, false, false, "Everything Bagel"),
        (Everything, true, false, "Toasted\nEverything Bagel"),
        (WholeWheat, false, true, "on a\nWhole Wheat Bagel"),
        (WholeWheat, true, true, "on a Toasted\nWhole Wheat Bagel"),
        (WholeWheat, false, false, "Whole Wheat Bagel"),
        (WholeWheat, true, false, "Toasted\nWhole Wheat Bagel"),
    ];

    for &(base, toasted, has_other, want) in cases {
        assert_eq!(
            base_line_text(base, toasted, has_other),
            want,
            "{base:?} toasted={toasted} has_other={has_other}"
        );
    }
}

#[test]
fn alone_never_starts_with_preposition() {
    for base in BagelBase::ALL {
        for toasted in [false, true] {
            assert!(!base_line_text(base, toasted, false).starts_with("on "));
            assert!(base_line_text(base, toasted, true).starts_with("on "));
        }
    }
}
