use itertools::Itertools;

use crate::error::{Error, Result};

/// Attribute pairs for an HTML tag. Serialization preserves insertion order.
pub type Attributes = Vec<(String, String)>;

/// A node in the rendered HTML tree. Trees are built bottom-up by the
/// renderer and never mutated afterwards; every parent exclusively owns its
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(Leaf),
    Parent(Parent),
}

impl HtmlNode {
    pub fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }
}

impl From<Leaf> for HtmlNode {
    fn from(leaf: Leaf) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<Parent> for HtmlNode {
    fn from(parent: Parent) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A childless node holding literal text. A missing value violates the leaf
/// invariant and surfaces as [`Error::MissingValue`] at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaf {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl Leaf {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(tag: &str, value: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes,
        }
    }

    /// An untagged leaf serializes to its raw value, unescaped.
    pub fn to_html(&self) -> Result<String> {
        let value = self.value.as_ref().ok_or(Error::MissingValue)?;

        Ok(match &self.tag {
            Some(tag) => format!(
                "<{}{}>{}</{}>",
                tag,
                attributes_to_html(&self.attributes),
                value,
                tag
            ),
            None => value.clone(),
        })
    }
}

/// A node holding an ordered child sequence and no direct text. Tag and
/// children are both required; their absence surfaces as
/// [`Error::MissingTag`] / [`Error::MissingChildren`] at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parent {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

impl Parent {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn to_html(&self) -> Result<String> {
        let tag = self.tag.as_ref().ok_or(Error::MissingTag)?;
        let children = self.children.as_ref().ok_or(Error::MissingChildren)?;
        let body = children
            .iter()
            .map(|child| child.to_html())
            .collect::<Result<String>>()?;

        Ok(format!(
            "<{}{}>{}</{}>",
            tag,
            attributes_to_html(&self.attributes),
            body,
            tag
        ))
    }
}

fn attributes_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, value))
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_attributes() -> Attributes {
        vec![
            ("href".to_string(), "https://example.com".to_string()),
            ("target".to_string(), "_blank".to_string()),
        ]
    }

    #[test]
    fn test_leaf_without_tag_returns_raw_value() {
        let leaf = Leaf::new(None, "test text");
        assert_eq!(leaf.to_html().unwrap(), "test text");
    }

    #[test]
    fn test_leaf_without_value_fails() {
        let leaf = Leaf {
            tag: Some("p".to_string()),
            value: None,
            attributes: Attributes::new(),
        };
        assert_eq!(leaf.to_html(), Err(Error::MissingValue));
    }

    #[test]
    fn test_leaf_without_attributes() {
        let leaf = Leaf::new(Some("b"), "bold text");
        assert_eq!(leaf.to_html().unwrap(), "<b>bold text</b>");
    }

    #[test]
    fn test_leaf_serializes_attributes_in_insertion_order() {
        let leaf = Leaf::with_attributes("a", "example.com", link_attributes());
        assert_eq!(
            leaf.to_html().unwrap(),
            "<a href=\"https://example.com\" target=\"_blank\">example.com</a>"
        );
    }

    #[test]
    fn test_empty_value_is_valid() {
        let leaf = Leaf::new(Some("span"), "");
        assert_eq!(leaf.to_html().unwrap(), "<span></span>");
    }

    #[test]
    fn test_parent_without_tag_fails() {
        let parent = Parent {
            tag: None,
            children: Some(vec![Leaf::new(None, "test").into()]),
            attributes: Attributes::new(),
        };
        assert_eq!(parent.to_html(), Err(Error::MissingTag));
    }

    #[test]
    fn test_parent_without_children_fails() {
        let parent = Parent {
            tag: Some("p".to_string()),
            children: None,
            attributes: Attributes::new(),
        };
        assert_eq!(parent.to_html(), Err(Error::MissingChildren));
    }

    #[test]
    fn test_parent_with_empty_children_is_valid() {
        let parent = Parent::new("div", Vec::new());
        assert_eq!(parent.to_html().unwrap(), "<div></div>");
    }

    #[test]
    fn test_parent_concatenates_children_in_order() {
        let parent = Parent::new(
            "p",
            vec![
                Leaf::new(Some("b"), "Bold text").into(),
                Leaf::new(None, "Normal text").into(),
                Leaf::new(Some("i"), "Italic text").into(),
                Leaf::new(None, "Normal text").into(),
            ],
        );
        assert_eq!(
            parent.to_html().unwrap(),
            "<p><b>Bold text</b>Normal text<i>Italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_nested_parents_serialize_depth_first() {
        let inner = Parent::new(
            "p",
            vec![
                Leaf::new(Some("b"), "Bold text").into(),
                Leaf::new(None, "Normal text").into(),
            ],
        );
        let outer = Parent::new(
            "p",
            vec![
                Leaf::new(Some("i"), "Italic text").into(),
                inner.into(),
            ],
        );
        assert_eq!(
            outer.to_html().unwrap(),
            "<p><i>Italic text</i><p><b>Bold text</b>Normal text</p></p>"
        );
    }

    #[test]
    fn test_child_error_propagates_through_parent() {
        let parent = Parent::new(
            "div",
            vec![
                HtmlNode::Leaf(Leaf {
                    tag: Some("p".to_string()),
                    value: None,
                    attributes: Attributes::new(),
                }),
            ],
        );
        assert_eq!(parent.to_html(), Err(Error::MissingValue));
    }
}
