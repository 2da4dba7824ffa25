//! Menu tree node definitions.

use serde::{Deserialize, Serialize};

/// A node of the navigation menu tree.
///
/// Absent fields stay absent; defaults are applied by readers, not here, so
/// the directory builder can tell "not declared" from "declared false".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    /// Path segment or absolute path (e.g., "/projects", "/projects/:id").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Display-name token, resolved to a label outside this crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Roles allowed to see this entry (absent = inherit / unrestricted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_in_menu: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_in_breadcrumb: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    /// Link target passed through to the rendered anchor (e.g., "_blank").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

impl MenuItem {
    /// Create a leaf item for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_authority<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authority = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_hide_in_menu(mut self, hide: bool) -> Self {
        self.hide_in_menu = Some(hide);
        self
    }

    pub fn with_hide_in_breadcrumb(mut self, hide: bool) -> Self {
        self.hide_in_breadcrumb = Some(hide);
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = Some(children);
        self
    }

    /// Key used when indexing by path. A missing path maps to `""`.
    pub fn key(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    /// A group renders as a submenu: it has at least one named child.
    pub fn is_group(&self) -> bool {
        self.children
            .as_deref()
            .is_some_and(|children| children.iter().any(|child| child.name.is_some()))
    }

    pub fn is_hidden_in_menu(&self) -> bool {
        self.hide_in_menu.unwrap_or(false)
    }
}

/// Which glyph font a [`Icon::Glyph`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphSet {
    /// The widget toolkit's own icon font.
    Builtin,
    /// Font Awesome, declared with an `fa-` prefix.
    FontAwesome,
}

/// Menu icon, classified once when the menu is ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "IconDescriptor", into = "IconDescriptor")]
pub enum Icon {
    /// Image URL.
    Url(String),
    /// Named glyph from an icon font.
    Glyph { set: GlyphSet, name: String },
    /// Pre-built element description, passed through untouched.
    Prebuilt(serde_json::Value),
}

impl Icon {
    /// Classify a string descriptor.
    ///
    /// - `http...` is an image URL
    /// - `fa-<name>` is a Font Awesome glyph named `<name>`
    /// - anything else is a builtin glyph
    pub fn from_descriptor(descriptor: &str) -> Self {
        if descriptor.starts_with("http") {
            Icon::Url(descriptor.to_string())
        } else if let Some(name) = descriptor.strip_prefix("fa-") {
            Icon::Glyph {
                set: GlyphSet::FontAwesome,
                name: name.to_string(),
            }
        } else {
            Icon::Glyph {
                set: GlyphSet::Builtin,
                name: descriptor.to_string(),
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IconDescriptor {
    Text(String),
    Element(serde_json::Value),
}

impl From<IconDescriptor> for Icon {
    fn from(descriptor: IconDescriptor) -> Self {
        match descriptor {
            IconDescriptor::Text(text) => Icon::from_descriptor(&text),
            IconDescriptor::Element(value) => Icon::Prebuilt(value),
        }
    }
}

impl From<Icon> for IconDescriptor {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Url(url) => IconDescriptor::Text(url),
            Icon::Glyph {
                set: GlyphSet::FontAwesome,
                name,
            } => IconDescriptor::Text(format!("fa-{name}")),
            Icon::Glyph {
                set: GlyphSet::Builtin,
                name,
            } => IconDescriptor::Text(name),
            Icon::Prebuilt(value) => IconDescriptor::Element(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_classification() {
        assert_eq!(
            Icon::from_descriptor("https://cdn.example.com/wallet.png"),
            Icon::Url("https://cdn.example.com/wallet.png".into())
        );
        assert_eq!(
            Icon::from_descriptor("fa-exchange-alt"),
            Icon::Glyph {
                set: GlyphSet::FontAwesome,
                name: "exchange-alt".into()
            }
        );
        assert_eq!(
            Icon::from_descriptor("setting"),
            Icon::Glyph {
                set: GlyphSet::Builtin,
                name: "setting".into()
            }
        );
    }

    #[test]
    fn test_icon_deserialize() {
        let icons: Vec<Icon> =
            serde_json::from_str(r#"["fa-wallet", {"type": "svg", "id": "logo"}]"#).unwrap();
        assert_eq!(
            icons[0],
            Icon::Glyph {
                set: GlyphSet::FontAwesome,
                name: "wallet".into()
            }
        );
        assert!(matches!(icons[1], Icon::Prebuilt(_)));

        let json = serde_json::to_string(&icons[0]).unwrap();
        assert_eq!(json, r#""fa-wallet""#);
    }

    #[test]
    fn test_group_requires_named_child() {
        let unnamed = MenuItem::new("/a").with_children(vec![MenuItem::new("/a/b")]);
        assert!(!unnamed.is_group());

        let named = MenuItem::new("/a").with_children(vec![MenuItem::new("/a/b").with_name("B")]);
        assert!(named.is_group());

        assert!(!MenuItem::new("/leaf").is_group());
    }

    #[test]
    fn test_missing_path_key() {
        let item = MenuItem::default();
        assert_eq!(item.key(), "");
        assert!(!item.is_hidden_in_menu());
    }
}
