//! Mount — the widget's exclusively owned render surface.
//!
//! DESIGN
//! ======
//! The host supplies one mount point per widget instance; no widget code
//! touches ambient document state. The mount records declarative style
//! imports and appended static markup, and hands out shared handles to
//! interactive sub-elements. Widget closures hold `ElementRef`s the way the
//! original holds node references; the host reads the same handles back when
//! it paints.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One interactive sub-element: a display toggle and an editable value.
/// Elements start visible, matching a freshly rendered node.
#[derive(Debug)]
pub struct Element {
    pub visible: bool,
    pub value: String,
}

impl Default for Element {
    fn default() -> Self {
        Self { visible: true, value: String::new() }
    }
}

/// Shared handle to an element. Single-threaded, so `Rc<RefCell<_>>`.
pub type ElementRef = Rc<RefCell<Element>>;

/// The mount point handed to a widget at construction.
#[derive(Debug, Default)]
pub struct Mount {
    style_imports: Vec<String>,
    markup: String,
    elements: HashMap<String, ElementRef>,
}

impl Mount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declarative request to load a named style resource scoped to
    /// this mount point.
    pub fn import_style(&mut self, resource: &str) {
        self.style_imports.push(resource.to_string());
    }

    /// Append a static markup fragment to the mount's surface.
    pub fn append_markup(&mut self, fragment: &str) {
        self.markup.push_str(fragment);
    }

    /// Locate the element with the given id, creating it on first access.
    /// Repeated lookups return the same handle.
    pub fn element(&mut self, id: &str) -> ElementRef {
        Rc::clone(self.elements.entry(id.to_string()).or_default())
    }

    #[must_use]
    pub fn style_imports(&self) -> &[String] {
        &self.style_imports
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[cfg(test)]
#[path = "mount_test.rs"]
mod tests;
