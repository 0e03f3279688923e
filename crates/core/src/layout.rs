//! Layout tree abstraction
//!
//! The engine never talks to a concrete UI layer. Hosts expose their rendered
//! tree through [`LayoutNode`]; [`StaticNode`] is an in-memory implementation
//! over pre-measured spans for hosts that already hold measured boxes (an OCR
//! text layer, a test fixture).

use overlay_geometry::PixelRect;
use std::rc::Rc;

/// A node in the host's rendered layout tree.
///
/// Implementations are cheap handles; `Clone` duplicates the handle, not the
/// subtree.
pub trait LayoutNode: Clone {
    /// Child nodes in document order.
    fn children(&self) -> Vec<Self>;

    /// Whether this node is an element. Text leaves and grouping containers
    /// return false.
    fn is_element(&self) -> bool;

    /// The node's bounding box in viewport pixels.
    fn bounding_box(&self) -> PixelRect;

    /// Concatenated text content of the subtree.
    fn text_content(&self) -> String;

    /// Rendered pixel width of the first `end` characters of this node's
    /// text. `end` past the text length measures the full text.
    fn prefix_width(&self, end: usize) -> f32;
}

/// The container's primary content element: the container itself when it is
/// an element, otherwise its first element-typed child.
pub(crate) fn content_element<N: LayoutNode>(container: &N) -> Option<N> {
    if container.is_element() {
        return Some(container.clone());
    }

    container.children().into_iter().find(LayoutNode::is_element)
}

#[derive(Debug)]
enum NodeKind {
    /// Grouping-only wrapper with no box of its own (a component boundary).
    Fragment { children: Vec<StaticNode> },
    Element { bbox: PixelRect, advances: Vec<f32>, children: Vec<StaticNode> },
    Text { content: String },
}

/// An in-memory layout node over pre-measured geometry.
///
/// Handles are `Rc`-backed and single-threaded, like the rendered trees they
/// stand in for.
#[derive(Debug, Clone)]
pub struct StaticNode(Rc<NodeKind>);

impl StaticNode {
    pub fn fragment(children: Vec<StaticNode>) -> Self {
        Self(Rc::new(NodeKind::Fragment { children }))
    }

    pub fn element(bbox: PixelRect, children: Vec<StaticNode>) -> Self {
        Self(Rc::new(NodeKind::Element { bbox, advances: Vec::new(), children }))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self(Rc::new(NodeKind::Text { content: content.into() }))
    }

    /// An element wrapping a single text leaf, with one advance width per
    /// character of `content`.
    pub fn span(bbox: PixelRect, content: &str, advances: Vec<f32>) -> Self {
        Self(Rc::new(NodeKind::Element {
            bbox,
            advances,
            children: vec![Self::text(content)],
        }))
    }

    /// A [`span`](Self::span) whose characters share the box width evenly.
    pub fn uniform_span(bbox: PixelRect, content: &str) -> Self {
        let chars = content.chars().count();
        let advances = if chars == 0 {
            Vec::new()
        } else {
            vec![bbox.width / chars as f32; chars]
        };

        Self::span(bbox, content, advances)
    }
}

impl LayoutNode for StaticNode {
    fn children(&self) -> Vec<Self> {
        match self.0.as_ref() {
            NodeKind::Fragment { children } | NodeKind::Element { children, .. } => {
                children.clone()
            }
            NodeKind::Text { .. } => Vec::new(),
        }
    }

    fn is_element(&self) -> bool {
        matches!(self.0.as_ref(), NodeKind::Element { .. })
    }

    fn bounding_box(&self) -> PixelRect {
        match self.0.as_ref() {
            NodeKind::Element { bbox, .. } => *bbox,
            NodeKind::Fragment { .. } | NodeKind::Text { .. } => {
                PixelRect::new(0.0, 0.0, 0.0, 0.0)
            }
        }
    }

    fn text_content(&self) -> String {
        match self.0.as_ref() {
            NodeKind::Text { content } => content.clone(),
            NodeKind::Fragment { children } | NodeKind::Element { children, .. } => {
                children.iter().map(StaticNode::text_content).collect()
            }
        }
    }

    fn prefix_width(&self, end: usize) -> f32 {
        match self.0.as_ref() {
            NodeKind::Element { advances, .. } => {
                advances.iter().take(end).sum()
            }
            NodeKind::Fragment { .. } | NodeKind::Text { .. } => 0.0,
        }
    }
}
