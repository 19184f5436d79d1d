use crate::html::Leaf;

/// Formatting applied to a run of inline text. The set is closed: the
/// conversion in [`TextNode::to_leaf`] matches exhaustively, so adding a kind
/// without handling it is a compile error rather than a runtime fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of formatted text inside a block. `url` is carried only by links
/// (target) and images (source); equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub kind: TextKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: TextKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// Converts this node into its HTML leaf form. Plain text becomes an
    /// untagged leaf; images serialize their text as the `alt` attribute and
    /// carry an empty value.
    pub fn to_leaf(&self) -> Leaf {
        match self.kind {
            TextKind::Text => Leaf::new(None, &self.text),
            TextKind::Bold => Leaf::new(Some("b"), &self.text),
            TextKind::Italic => Leaf::new(Some("i"), &self.text),
            TextKind::Code => Leaf::new(Some("code"), &self.text),
            TextKind::Link => Leaf::with_attributes(
                "a",
                &self.text,
                vec![("href".to_string(), self.url.clone().unwrap_or_default())],
            ),
            TextKind::Image => Leaf::with_attributes(
                "img",
                "",
                vec![
                    ("src".to_string(), self.url.clone().unwrap_or_default()),
                    ("alt".to_string(), self.text.clone()),
                ],
            ),
        }
    }
}
