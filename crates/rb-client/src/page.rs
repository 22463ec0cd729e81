//! # Page
//!
//! The thread region of the document as a mutable HTML tree. Server markup is
//! parsed once and then edited in place; nothing here re-renders content.

use ego_tree::NodeId;
use rb_core::{HydrateError, Result};
use scraper::node::Text;
use scraper::{ElementRef, Html, Node, Selector};

/// Element id of the embedded thread payload.
pub const PAYLOAD_ELEMENT: &str = "post-data";

pub struct Page {
    html: Html,
}

impl Default for Page {
    fn default() -> Self {
        Self::parse("")
    }
}

impl Page {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// Replace the whole thread region with new markup.
    pub fn replace(&mut self, markup: &str) {
        self.html = Html::parse_fragment(markup);
    }

    /// Serialized markup of the thread region.
    pub fn to_html(&self) -> String {
        self.html.root_element().inner_html()
    }

    /// All elements in the region matching `css`, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<NodeId>> {
        let selector = parse_selector(css)?;
        // Html::select walks every node ever allocated, detached ones included
        Ok(self
            .html
            .root_element()
            .select(&selector)
            .map(|el| el.id())
            .collect())
    }

    /// Elements matching `css` below `scope`.
    pub fn select_within(&self, scope: NodeId, css: &str) -> Result<Vec<NodeId>> {
        let selector = parse_selector(css)?;
        Ok(self
            .element(scope)
            .map(|el| {
                el.select(&selector)
                    .map(|e| e.id())
                    .filter(|&id| id != scope)
                    .collect()
            })
            .unwrap_or_default())
    }

    pub fn first(&self, css: &str) -> Result<Option<NodeId>> {
        Ok(self.select(css)?.into_iter().next())
    }

    pub fn first_within(&self, scope: NodeId, css: &str) -> Result<Option<NodeId>> {
        Ok(self.select_within(scope, css)?.into_iter().next())
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
            .map(|el| el.id())
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.value().attr(name))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self, node: NodeId) -> String {
        self.element(node)
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }

    /// Replace all children of `node` with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        for child in self.children(node) {
            if let Some(mut child) = self.html.tree.get_mut(child) {
                child.detach();
            }
        }
        if let Some(mut el) = self.html.tree.get_mut(node) {
            el.append(text_node(text));
        }
    }

    /// Replace the first child of `node` with a text node, keeping the rest.
    pub fn replace_first_child(&mut self, node: NodeId, text: &str) {
        match self.children(node).first().copied() {
            Some(first) => {
                if let Some(mut first) = self.html.tree.get_mut(first) {
                    first.insert_before(text_node(text));
                    first.detach();
                }
            }
            None => {
                if let Some(mut el) = self.html.tree.get_mut(node) {
                    el.append(text_node(text));
                }
            }
        }
    }

    /// Detach `node` and its subtree from the region.
    pub fn remove(&mut self, node: NodeId) {
        if let Some(mut node) = self.html.tree.get_mut(node) {
            node.detach();
        }
    }

    /// Text content of the embedded thread payload, if present.
    pub fn payload(&self) -> Option<String> {
        self.element_by_id(PAYLOAD_ELEMENT).map(|node| self.text(node))
    }

    fn element(&self, node: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(node).and_then(ElementRef::wrap)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(node)
            .map(|n| n.children().map(|c| c.id()).collect())
            .unwrap_or_default()
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| HydrateError::Selector(format!("{css}: {e:?}")))
}

fn text_node(text: &str) -> Node {
    Node::Text(Text { text: text.into() })
}
