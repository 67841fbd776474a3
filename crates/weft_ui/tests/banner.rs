use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use weft_style::StyleValue;
use weft_theme::{PaletteToken, ThemeState};
use weft_ui::{banner, BannerIntent, Element, ElementKind, LiveRegion};

fn find_dismiss(root: &Element) -> Option<&Element> {
    root.find(&|e| e.kind == ElementKind::Button)
}

#[test]
fn banner_container_is_a_polite_status_region() {
    ThemeState::init_default();
    let rendered = banner("Saved").render();

    assert_eq!(rendered.root.accessibility.role, Some("status"));
    assert_eq!(rendered.root.accessibility.live, LiveRegion::Polite);
}

#[test]
fn intent_background_and_hidden_label_are_applied() {
    ThemeState::init_default();
    let rendered = banner("Something failed")
        .intent(BannerIntent::Error)
        .render();

    assert_eq!(
        rendered.root.style.get("background"),
        Some(&StyleValue::Palette(PaletteToken::Red100))
    );

    let hidden = rendered
        .root
        .find(&|e| e.accessibility.visually_hidden)
        .expect("error banners expose a hidden textual label");
    assert_eq!(hidden.content.as_deref(), Some("Error"));

    let icon = rendered
        .root
        .find_kind(ElementKind::Icon)
        .expect("error banners carry an icon");
    assert!(icon.accessibility.hidden, "icons are decorative");
    assert_eq!(
        icon.style.get("color"),
        Some(&StyleValue::Palette(PaletteToken::Red600))
    );
}

#[test]
fn confirmation_banners_have_no_icon_and_no_hidden_label() {
    ThemeState::init_default();
    let rendered = banner("All done")
        .intent(BannerIntent::Confirmation)
        .render();

    assert_eq!(
        rendered.root.style.get("background"),
        Some(&StyleValue::Palette(PaletteToken::Green100))
    );
    assert!(rendered.root.find_kind(ElementKind::Icon).is_none());
    assert!(rendered
        .root
        .find(&|e| e.accessibility.visually_hidden)
        .is_none());
}

#[test]
fn explicit_background_beats_intent_background() {
    ThemeState::init_default();
    let rendered = banner("Custom")
        .intent(BannerIntent::Warning)
        .background(PaletteToken::Red100)
        .render();

    assert_eq!(
        rendered.root.style.get("background"),
        Some(&StyleValue::Palette(PaletteToken::Red100))
    );
}

#[test]
fn unrecognized_intent_renders_unstyled() {
    ThemeState::init_default();
    let rendered = banner("Plain").intent_name("fatal").render();

    assert_eq!(rendered.root.style.get("background"), None);
    assert!(rendered.root.find_kind(ElementKind::Icon).is_none());
    assert!(rendered
        .root
        .find(&|e| e.accessibility.visually_hidden)
        .is_none());
    // The message itself still renders.
    assert!(rendered
        .root
        .find(&|e| e.content.as_deref() == Some("Plain"))
        .is_some());
}

#[test]
fn dismiss_control_is_labeled_for_the_intent() {
    ThemeState::init_default();
    let rendered = banner("Broken")
        .intent(BannerIntent::Error)
        .dismissible(|| {})
        .render();

    let dismiss = find_dismiss(&rendered.root).expect("dismissible banners render a control");
    assert_eq!(
        dismiss.accessibility.label.as_deref(),
        Some("Dismiss error")
    );
    // Icon-only control: decorative to assistive technology while the
    // visually hidden intent label carries the announcement.
    assert!(dismiss.accessibility.hidden);
    assert_eq!(
        dismiss.style.get("margin-left"),
        Some(&StyleValue::Raw("auto".to_string()))
    );
}

#[test]
fn dismiss_invokes_the_callback_once_with_no_arguments() {
    ThemeState::init_default();
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();

    let rendered = banner("Broken")
        .intent(BannerIntent::Error)
        .dismissible(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .render();

    find_dismiss(&rendered.root).unwrap().click();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn non_dismissible_banners_render_no_control() {
    ThemeState::init_default();
    let rendered = banner("Static").render();
    assert!(find_dismiss(&rendered.root).is_none());
}

#[test]
fn renders_hand_out_distinct_handles() {
    ThemeState::init_default();
    let first = banner("one").render();
    let second = banner("two").render();
    assert_ne!(first.handle, second.handle);
}
