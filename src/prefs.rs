//! Theme and language preferences, applied to the document root.

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "LIGHT",
            Theme::Dark => "DARK",
        }
    }

    /// A stored choice wins over the system preference.
    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Self {
        stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
}

/// Mutable attributes of the document root element.
pub trait RootAttributes {
    fn set_class(&self, class: &str, enabled: bool);
    fn set_attribute(&self, name: &str, value: &str);
}

pub fn apply_theme(root: &impl RootAttributes, theme: Theme) {
    root.set_class(DARK_CLASS, theme.is_dark());
    root.set_attribute("data-theme", theme.label());
}

pub fn apply_lang(root: &impl RootAttributes, lang: Lang) {
    root.set_attribute("lang", lang.code());
}

/// The live `<html>` element.
#[cfg(feature = "hydrate")]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

#[cfg(feature = "hydrate")]
impl RootAttributes for DocumentRoot {
    fn set_class(&self, class: &str, enabled: bool) {
        let Some(el) = Self::element() else {
            return;
        };
        if let Err(e) = el.class_list().toggle_with_force(class, enabled) {
            log::warn!("couldn't toggle root class {class}: {e:?}");
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let Some(el) = Self::element() else {
            return;
        };
        if let Err(e) = el.set_attribute(name, value) {
            log::warn!("couldn't set root attribute {name}: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    #[derive(Default)]
    struct FakeRoot {
        classes: RefCell<BTreeSet<String>>,
        attrs: RefCell<BTreeMap<String, String>>,
    }

    impl RootAttributes for FakeRoot {
        fn set_class(&self, class: &str, enabled: bool) {
            let mut classes = self.classes.borrow_mut();
            if enabled {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }

        fn set_attribute(&self, name: &str, value: &str) {
            self.attrs
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_theme_toggles_dark_class() {
        let root = FakeRoot::default();
        apply_theme(&root, Theme::Dark);
        assert!(root.classes.borrow().contains("dark"));
        assert_eq!(root.attrs.borrow().get("data-theme").map(String::as_str), Some("DARK"));

        apply_theme(&root, Theme::Dark.toggled());
        assert!(root.classes.borrow().is_empty());
    }

    #[test]
    fn test_lang_sets_attribute() {
        let root = FakeRoot::default();
        apply_lang(&root, Lang::En);
        assert_eq!(root.attrs.borrow().get("lang").map(String::as_str), Some("en"));
    }

    #[test]
    fn test_stored_theme_wins() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
    }
}
