//! Render-as-child attribute merging.
//!
//! When a component is asked to render through a caller-supplied root
//! instead of its own element, its resolved attributes are merged onto
//! the single child element it received. The merge operates on an
//! explicit (tag, attributes, children) triple: class lists merge with
//! the same per-property-group semantics as everywhere else, and for any
//! other attribute the child's own value wins.

use thiserror::Error;

use crate::classes::merge_class_lists;

/// An element triple used by the render-as-child merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag name.
    pub tag: String,
    /// Attributes in declaration order.
    pub attrs: Vec<(String, String)>,
    /// Child content in order.
    pub children: Vec<NodeContent>,
}

impl ElementNode {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(NodeContent::Element(child));
        self
    }

    /// Appends a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(NodeContent::Text(text.into()));
        self
    }

    /// Returns the value of `name`, when set.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Content of one child slot position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    /// A nested element.
    Element(ElementNode),
    /// A text run.
    Text(String),
}

/// Usage error raised when render-as-child does not receive exactly one
/// child element.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The child list held no element to merge onto.
    #[error("render-as-child requires one child element, none was given")]
    NoChildElement,
    /// The child list held more than one element.
    #[error("render-as-child requires exactly one child element, found {found}")]
    MultipleChildElements {
        /// Number of element children received.
        found: usize,
    },
}

/// Merges a component's resolved attributes onto the single element in
/// `children`, without introducing a wrapper element.
///
/// The child's class attribute is merged after the resolved class so the
/// child wins per-property-group conflicts; for every other attribute a
/// value set by the child replaces the resolved one. Text children
/// around the element are dropped because the merged element becomes the
/// rendered root.
///
/// # Errors
///
/// Returns a [`SlotError`] when `children` does not contain exactly one
/// element.
pub fn merge_into_child(
    resolved: &[(&str, String)],
    children: Vec<NodeContent>,
) -> Result<ElementNode, SlotError> {
    let mut elements: Vec<ElementNode> = children
        .into_iter()
        .filter_map(|content| match content {
            NodeContent::Element(element) => Some(element),
            NodeContent::Text(_) => None,
        })
        .collect();

    let mut child = match elements.len() {
        0 => return Err(SlotError::NoChildElement),
        1 => elements.remove(0),
        found => return Err(SlotError::MultipleChildElements { found }),
    };

    let mut merged: Vec<(String, String)> = Vec::new();
    for (name, value) in resolved {
        if *name == "class" {
            let child_class = child.attr_value("class").unwrap_or("");
            merged.push((
                "class".to_string(),
                merge_class_lists(&[value.as_str(), child_class]),
            ));
        } else if child.attr_value(name).is_none() {
            merged.push((name.to_string(), value.clone()));
        }
    }
    for (name, value) in child.attrs {
        if name == "class" && merged.iter().any(|(merged_name, _)| merged_name == "class") {
            continue;
        }
        merged.push((name, value));
    }
    child.attrs = merged;

    Ok(child)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolved() -> Vec<(&'static str, String)> {
        vec![
            ("class", "inline-flex h-12 px-6".to_string()),
            ("data-ui-kind", "button".to_string()),
            ("aria-disabled", "false".to_string()),
        ]
    }

    #[test]
    fn single_child_receives_resolved_attributes() {
        let child = ElementNode::new("a")
            .attr("href", "/docs")
            .text("Documentation");

        let merged = merge_into_child(&resolved(), vec![NodeContent::Element(child)])
            .expect("one child element");

        assert_eq!(merged.tag, "a");
        assert_eq!(merged.attr_value("href"), Some("/docs"));
        assert_eq!(merged.attr_value("data-ui-kind"), Some("button"));
        assert_eq!(merged.attr_value("class"), Some("inline-flex h-12 px-6"));
    }

    #[test]
    fn child_class_wins_its_property_groups() {
        let child = ElementNode::new("a").attr("class", "px-0 text-primary-600");

        let merged = merge_into_child(&resolved(), vec![NodeContent::Element(child)])
            .expect("one child element");

        assert_eq!(
            merged.attr_value("class"),
            Some("inline-flex h-12 px-0 text-primary-600")
        );
    }

    #[test]
    fn child_attribute_values_win_over_resolved_ones() {
        let child = ElementNode::new("span").attr("aria-disabled", "true");

        let merged = merge_into_child(&resolved(), vec![NodeContent::Element(child)])
            .expect("one child element");

        assert_eq!(merged.attr_value("aria-disabled"), Some("true"));
    }

    #[test]
    fn zero_children_is_a_usage_error() {
        assert_eq!(
            merge_into_child(&resolved(), vec![]),
            Err(SlotError::NoChildElement)
        );
        assert_eq!(
            merge_into_child(&resolved(), vec![NodeContent::Text("loose".to_string())]),
            Err(SlotError::NoChildElement)
        );
    }

    #[test]
    fn multiple_children_is_a_usage_error() {
        let children = vec![
            NodeContent::Element(ElementNode::new("a")),
            NodeContent::Element(ElementNode::new("span")),
        ];

        assert_eq!(
            merge_into_child(&resolved(), children),
            Err(SlotError::MultipleChildElements { found: 2 })
        );
    }

    #[test]
    fn merge_keeps_child_children_intact() {
        let child = ElementNode::new("a").text("label").child(ElementNode::new("svg"));

        let merged = merge_into_child(&resolved(), vec![NodeContent::Element(child)])
            .expect("one child element");

        assert_eq!(merged.children.len(), 2);
    }
}
