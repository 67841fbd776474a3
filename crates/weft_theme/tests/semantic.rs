use weft_theme::{
    IntentFamily, PaletteToken, SemanticColorSet, SemanticRole, Theme, WeftTheme,
};

#[test]
fn every_family_and_role_resolves_to_a_defined_entry() {
    let theme = WeftTheme::new();
    for family in IntentFamily::all() {
        let record = theme.semantic(*family);
        for role in SemanticRole::all() {
            let token = record.get(*role);
            // A defined entry always parses back from its own name.
            assert_eq!(
                PaletteToken::parse(token.name()).unwrap(),
                token,
                "family={family:?} role={role:?}"
            );
        }
    }
}

#[test]
fn resolution_is_referentially_stable() {
    let set = SemanticColorSet::default();
    for family in IntentFamily::all() {
        let first = *set.resolve(*family);
        let second = *set.resolve(*family);
        assert_eq!(
            first, second,
            "two resolutions of {family:?} should yield identical records"
        );
    }
}

#[test]
fn danger_family_selects_the_red_ramp() {
    let theme = WeftTheme::new();
    let danger = theme.semantic(IntentFamily::Danger);
    assert_eq!(danger.get(SemanticRole::Main), PaletteToken::Red500);
    assert_eq!(danger.get(SemanticRole::Dark), PaletteToken::Red600);
    assert_eq!(danger.get(SemanticRole::Darker), PaletteToken::Red700);
    assert_eq!(danger.get(SemanticRole::Light), PaletteToken::Red100);
    assert_eq!(danger.get(SemanticRole::Lighter), PaletteToken::Red000);
    assert_eq!(danger.get(SemanticRole::Text), PaletteToken::White);
}

#[test]
fn secondary_currently_mirrors_primary() {
    let set = SemanticColorSet::default();
    assert_eq!(
        set.resolve(IntentFamily::Primary),
        set.resolve(IntentFamily::Secondary)
    );
}

#[test]
fn semantic_records_serialize_by_entry_name() {
    let set = SemanticColorSet::default();
    let json = serde_json::to_value(set.resolve(IntentFamily::Danger)).unwrap();
    assert_eq!(json["main"], "red500");
    assert_eq!(json["border_color"], "charcoal300");
}
