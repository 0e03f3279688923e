//! Span indexing over a text layer
//!
//! Enumerates the rendered text runs of a container and measures each one in
//! container-local normalized space, so annotation geometry and rendered text
//! become comparable regardless of where the container sits in the viewport.

use crate::layout::{content_element, LayoutNode};
use crate::OverlayError;
use overlay_geometry::{
    rects_intersect, NormalizedPoint, NormalizedRect, PixelPoint, PixelScale,
};

/// A rendered text run: the element directly containing a text leaf, plus its
/// container-local normalized box. Produced transiently per render pass.
#[derive(Debug, Clone)]
pub struct MeasuredNode<N> {
    pub bbox: NormalizedRect,
    pub node: N,
}

/// Measure every text run under `container`, in document order.
///
/// Boxes are normalized against the content element's own box and translated
/// so its top-left is the origin, removing any ancestor offset. With `limit`,
/// only runs intersecting it are kept. A container without a content element
/// yields an empty index and a warning; an empty content box is an
/// [`InvalidScale`](overlay_geometry::GeometryError::InvalidScale) error.
///
/// The index is materialized once per call. Re-invoke after layout changes;
/// unchanged layout produces an identical index.
pub fn index_spans<N: LayoutNode>(
    container: &N,
    limit: Option<&NormalizedRect>,
) -> Result<Vec<MeasuredNode<N>>, OverlayError> {
    let Some(content) = content_element(container) else {
        log::warn!("no content element found in text layer container");
        return Ok(Vec::new());
    };

    let content_box = content.bounding_box();
    let scale = PixelScale { width: content_box.width, height: content_box.height };
    let origin = NormalizedPoint::from_pixel(
        PixelPoint { x: content_box.x, y: content_box.y },
        scale,
    )?;

    let mut parents = Vec::new();
    collect_text_parents(&content, &mut parents);

    let mut measured = Vec::with_capacity(parents.len());
    for parent in parents {
        let bbox = NormalizedRect::from_pixel(parent.bounding_box(), scale)?
            .translated(-origin.x1, -origin.y1);
        measured.push(MeasuredNode { bbox, node: parent });
    }

    if let Some(limit) = limit {
        measured.retain(|node| rects_intersect(Some(limit), Some(&node.bbox)));
    }

    Ok(measured)
}

/// Depth-first walk pushing the parent element once per text leaf, in
/// document order.
fn collect_text_parents<N: LayoutNode>(node: &N, out: &mut Vec<N>) {
    for child in node.children() {
        if child.is_element() {
            collect_text_parents(&child, out);
        } else {
            out.push(node.clone());
        }
    }
}
