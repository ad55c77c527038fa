//! Retained visual node owned by a widget.
//!
//! An `Element` is the widget-side view of one node in the host's render
//! tree: a class list, a handful of inline style properties, inner markup and
//! the bounds the host last measured for it. The host reads these back to
//! update its own tree; widgets only ever write them.

use crate::geometry::Bounds;
use crate::length::{CssLength, Transform};

/// Inline style properties a widget may write.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub left: Option<CssLength>,
    pub width: Option<CssLength>,
    pub transform: Option<Transform>,
}

/// A visual node with classes, inline style, markup and measured bounds.
#[derive(Debug, Clone, Default)]
pub struct Element {
    classes: Vec<String>,
    style: Style,
    inner_html: String,
    bounds: Bounds,
    /// Number of class/style/markup writes since creation.
    mutations: usize,
}

impl Element {
    /// Create an element carrying the given classes.
    pub fn with_classes(classes: &[&str]) -> Self {
        let mut element = Self::default();
        for class in classes {
            if !element.has_class(class) {
                element.classes.push((*class).to_string());
            }
        }
        element
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Counts as a write even when already present.
    pub fn add_class(&mut self, class: &str) {
        self.mutations += 1;
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class. Counts as a write even when absent.
    pub fn remove_class(&mut self, class: &str) {
        self.mutations += 1;
        self.classes.retain(|c| c != class);
    }

    /// Add or remove a class depending on `present`.
    pub fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn set_left(&mut self, left: CssLength) {
        self.mutations += 1;
        self.style.left = Some(left);
    }

    pub fn set_width(&mut self, width: CssLength) {
        self.mutations += 1;
        self.style.width = Some(width);
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.mutations += 1;
        self.style.transform = Some(transform);
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace the element's markup.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.mutations += 1;
        self.inner_html = html.into();
    }

    /// Bounds from the host's last layout pass.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Record the bounds the host measured. Not counted as a write.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Total class/style/markup writes performed on this element.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_classes_deduplicates() {
        let el = Element::with_classes(&["a", "b", "a"]);
        assert_eq!(el.classes(), ["a".to_string(), "b".to_string()]);
        assert_eq!(el.mutation_count(), 0);
    }

    #[test]
    fn test_class_writes_are_counted() {
        let mut el = Element::default();
        el.add_class("hide");
        el.add_class("hide");
        assert!(el.has_class("hide"));
        assert_eq!(el.classes().len(), 1);
        assert_eq!(el.mutation_count(), 2);

        el.set_class("hide", false);
        assert!(!el.has_class("hide"));
        assert_eq!(el.mutation_count(), 3);
    }

    #[test]
    fn test_style_writes() {
        let mut el = Element::default();
        el.set_left(CssLength::Percent(30.0));
        el.set_width(CssLength::Percent(20.0));
        el.set_transform(Transform::ScaleX(0.5));

        assert_eq!(el.style().left, Some(CssLength::Percent(30.0)));
        assert_eq!(el.style().width, Some(CssLength::Percent(20.0)));
        assert_eq!(el.style().transform, Some(Transform::ScaleX(0.5)));
        assert_eq!(el.mutation_count(), 3);
    }

    #[test]
    fn test_bounds_are_not_writes() {
        let mut el = Element::default();
        el.set_bounds(Bounds::sized(200.0, 4.0));
        assert_eq!(el.bounds().width, 200.0);
        assert_eq!(el.mutation_count(), 0);
    }
}
