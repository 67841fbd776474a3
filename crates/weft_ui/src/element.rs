//! Element model: the render-tree components produce
//!
//! Rendering proper belongs to the host framework; components here build a
//! lightweight tree of [`Element`] values carrying composed styles,
//! accessibility attributes, and callbacks. The host walks the tree, owns
//! the concrete widgets, and keeps the [`ElementHandle`] mapping for
//! imperative focus/measure requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use weft_style::{ComposedStyle, StyleFragment};

/// Click callback shape shared by every interactive element.
pub type ClickCallback = Arc<dyn Fn() + Send + Sync>;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to a rendered element.
///
/// Returned by component `render` operations; the caller may hand it back
/// to the host framework to focus or measure the underlying widget. The
/// widget itself stays owned by the framework.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Allocate a fresh handle.
    pub(crate) fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// What kind of widget an element maps to.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ElementKind {
    Container,
    Text,
    Icon,
    Button,
}

/// Live-region politeness for status containers.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum LiveRegion {
    #[default]
    Off,
    Polite,
    Assertive,
}

/// Accessibility attributes attached to an element.
#[derive(Clone, Debug, Default)]
pub struct Accessibility {
    /// Landmark/widget role exposed to assistive technology.
    pub role: Option<&'static str>,
    /// Live-region update semantics.
    pub live: LiveRegion,
    /// Accessible label.
    pub label: Option<String>,
    /// Hidden from assistive technology (decorative content).
    pub hidden: bool,
    /// Visually hidden but still exposed to assistive technology.
    pub visually_hidden: bool,
}

/// A node in the tree a component renders to.
#[derive(Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub style: ComposedStyle,
    pub accessibility: Accessibility,
    /// Text content, or inline SVG source for icons.
    pub content: Option<String>,
    pub on_click: Option<ClickCallback>,
    pub children: Vec<Element>,
    pub id: Option<String>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: ComposedStyle::new(),
            accessibility: Accessibility::default(),
            content: None,
            on_click: None,
            children: Vec::new(),
            id: None,
        }
    }

    /// Set the composed style.
    pub fn style(mut self, style: ComposedStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a flat fragment as the whole style. Shorthand for leaves that
    /// never carry pseudo blocks.
    pub fn styled(mut self, fragment: StyleFragment) -> Self {
        self.style.flat = fragment;
        self
    }

    /// Merge extra declarations into the flat style, keeping pseudo
    /// blocks intact. The incoming declarations win on conflict.
    pub fn merge_styled(mut self, fragment: StyleFragment) -> Self {
        self.style.flat = std::mem::take(&mut self.style.flat).merge(fragment);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_if(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn role(mut self, role: &'static str) -> Self {
        self.accessibility.role = Some(role);
        self
    }

    /// Mark as a polite live region: updates are announced without
    /// interrupting the user.
    pub fn live_polite(mut self) -> Self {
        self.accessibility.live = LiveRegion::Polite;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.accessibility.label = Some(label.into());
        self
    }

    /// Hide from assistive technology.
    pub fn aria_hidden(mut self) -> Self {
        self.accessibility.hidden = true;
        self
    }

    pub fn on_click(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(callback));
        self
    }

    /// Invoke the click callback, if any. The host framework calls this
    /// when the underlying widget is activated; tests call it directly.
    pub fn click(&self) {
        if let Some(callback) = &self.on_click {
            callback();
        }
    }

    /// Depth-first search over this element and its descendants.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find(predicate))
    }

    /// First descendant (or self) of the given kind.
    pub fn find_kind(&self, kind: ElementKind) -> Option<&Element> {
        self.find(&|element| element.kind == kind)
    }
}

/// A generic container element.
pub fn container() -> Element {
    Element::new(ElementKind::Container)
}

/// A text element.
pub fn text(content: impl Into<String>) -> Element {
    let mut element = Element::new(ElementKind::Text);
    element.content = Some(content.into());
    element
}

/// An icon element holding inline SVG source.
pub fn icon_element(svg: impl Into<String>) -> Element {
    let mut element = Element::new(ElementKind::Icon);
    element.content = Some(svg.into());
    element
}

/// A button element.
pub fn button() -> Element {
    Element::new(ElementKind::Button)
}

/// Text that is moved off-screen but kept in the accessibility tree, for
/// labels that must be announced without being drawn.
pub fn visually_hidden(content: impl Into<String>) -> Element {
    let mut element = text(content).styled(
        StyleFragment::new()
            .set("position", "absolute")
            .set("clip", "rect(1px, 1px, 1px, 1px)")
            .set("overflow", "hidden")
            .set("height", 1.0)
            .set("width", 1.0),
    );
    element.accessibility.visually_hidden = true;
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn handles_are_unique() {
        let a = ElementHandle::next();
        let b = ElementHandle::next();
        assert_ne!(a, b);
    }

    #[test]
    fn find_walks_depth_first() {
        let tree = container()
            .child(container().child(text("inner")))
            .child(text("outer"));

        let found = tree
            .find(&|e| e.kind == ElementKind::Text)
            .expect("should find a text node");
        assert_eq!(found.content.as_deref(), Some("inner"));
    }

    #[test]
    fn click_invokes_the_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let element = button().on_click(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        element.click();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clicking_a_plain_element_is_a_no_op() {
        container().click();
    }

    #[test]
    fn visually_hidden_text_stays_in_the_accessibility_tree() {
        let element = visually_hidden("Warning");
        assert!(element.accessibility.visually_hidden);
        assert!(!element.accessibility.hidden);
        assert_eq!(element.content.as_deref(), Some("Warning"));
    }
}
