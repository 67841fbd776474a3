use weft_style::{ComposedStyle, PseudoProps, PseudoState, StyleFragment, StyleProps, StyleValue};
use weft_theme::{PaletteToken, WeftTheme};

#[test]
fn passthrough_background_overrides_base_background() {
    let theme = WeftTheme::new();

    let base = StyleFragment::new().bg(PaletteToken::Blue100);
    let passthrough = StyleProps::new()
        .background(PaletteToken::Red100)
        .to_fragment(&theme);

    let composed = ComposedStyle::compose(base, StyleFragment::new(), passthrough);
    assert_eq!(
        composed.get("background"),
        Some(&StyleValue::Palette(PaletteToken::Red100))
    );
    assert_eq!(
        composed.get("background").unwrap().resolve(&theme),
        PaletteToken::Red100.base().to_css()
    );
}

#[test]
fn full_pipeline_keeps_layer_and_block_structure() {
    let theme = WeftTheme::new();

    let base = StyleFragment::new()
        .set("display", "flex")
        .set("align-items", "center")
        .bg(PaletteToken::Blue100);
    let intent = StyleFragment::new().bg(PaletteToken::Yellow100);
    let props = StyleProps::new()
        .width("100%")
        .hover_style(StyleFragment::new().border("1px solid black"));

    let composed = ComposedStyle::compose(base, intent, props.to_fragment(&theme))
        .with_pseudo(props.pseudo.compose());

    // Intent wins over base; the explicit width is carried.
    assert_eq!(
        composed.get("background"),
        Some(&StyleValue::Palette(PaletteToken::Yellow100))
    );
    assert_eq!(
        composed.get("width"),
        Some(&StyleValue::Raw("100%".to_string()))
    );
    // Exactly one scoped block, under :hover.
    assert_eq!(composed.pseudo.len(), 1);
    assert_eq!(composed.pseudo[0].state, PseudoState::Hover);

    let css = composed.to_css(&theme);
    assert!(css.contains("display: flex;"));
    assert!(css.ends_with(":hover { border: 1px solid black; }"));
}

#[test]
fn absent_pseudo_props_add_nothing() {
    let theme = WeftTheme::new();
    let props = StyleProps::new();

    let composed =
        ComposedStyle::compose(StyleFragment::new(), StyleFragment::new(), props.to_fragment(&theme))
            .with_pseudo(props.pseudo.compose());

    assert!(composed.flat.is_empty());
    assert!(composed.pseudo.is_empty());
    assert_eq!(composed.to_css(&theme), "");
}

#[test]
fn pseudo_compose_matches_spec_examples() {
    // compose({}) -> empty fragment set
    assert!(PseudoProps::new().compose().is_empty());

    // compose({hoverStyle: {border: ...}}) -> hover scope only
    let blocks = PseudoProps::new()
        .hover(StyleFragment::new().border("1px solid black"))
        .compose();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].state, PseudoState::Hover);
    assert!(!blocks.iter().any(|b| b.state == PseudoState::Focus));
    assert!(!blocks.iter().any(|b| b.state == PseudoState::Active));
}
