//! Caret placement
//!
//! Resolves a click or drag point to a caret: pick the nearest text run by
//! vertical distance, then walk the run's text backwards one unit at a time
//! until the rendered sub-range width stops getting closer to the pointer.
//! The walk assumes width grows roughly monotonically with offset, which
//! holds for left-to-right text; ligature-heavy scripts are an accepted
//! approximation error.

use crate::layout::LayoutNode;
use crate::span_index::MeasuredNode;
use overlay_geometry::{NormalizedPoint, NormalizedRect};
use std::cmp::Ordering;

/// A caret: a zero-width rect spanning the run's vertical extent, plus the
/// range anchor (node handle and end offset) that produced it, for consumers
/// that need a text-selection anchor.
#[derive(Debug, Clone)]
pub struct Cursor<N> {
    pub rect: NormalizedRect,
    pub node: N,
    pub end: usize,
}

fn edge_distance(low: f32, high: f32, value: f32) -> f32 {
    (low - value).abs().min((high - value).abs())
}

fn compare_by_distance<N>(
    a: &MeasuredNode<N>,
    b: &MeasuredNode<N>,
    point: &NormalizedPoint,
) -> Ordering {
    let vertical = edge_distance(a.bbox.y1, a.bbox.y2, point.y1)
        .total_cmp(&edge_distance(b.bbox.y1, b.bbox.y2, point.y1));
    if vertical != Ordering::Equal {
        return vertical;
    }

    // A run horizontally straddling the point wins the tie outright.
    let a_straddles = a.bbox.x1 < point.x1 && a.bbox.x2 > point.x1;
    let b_straddles = b.bbox.x1 < point.x1 && b.bbox.x2 > point.x1;
    match (a_straddles, b_straddles) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => edge_distance(a.bbox.x1, a.bbox.x2, point.x1)
            .total_cmp(&edge_distance(b.bbox.x1, b.bbox.x2, point.x1)),
    }
}

/// The measured run nearest to `point`: minimum vertical edge distance,
/// straddling runs win ties, then minimum horizontal edge distance. The
/// first such run wins remaining ties; `None` on empty input.
pub fn nearest<'n, N>(
    nodes: &'n [MeasuredNode<N>],
    point: &NormalizedPoint,
) -> Option<&'n MeasuredNode<N>> {
    nodes.iter().reduce(|best, candidate| {
        if compare_by_distance(candidate, best, point) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}

/// Resolve `point` to a caret inside the nearest text run.
///
/// Starting from a range covering the run's full text, the end offset
/// shrinks one unit at a time while the rendered end position keeps getting
/// closer to the pointer; the first regression reverts one step and stops.
/// Runs that render at zero width keep the full range and place the caret at
/// the run's left edge.
pub fn locate_cursor<N: LayoutNode>(
    nodes: &[MeasuredNode<N>],
    point: &NormalizedPoint,
) -> Option<Cursor<N>> {
    let elem = nearest(nodes, point)?;

    let text_len = elem.node.text_content().chars().count();
    let full_width = elem.node.prefix_width(text_len);
    let span_width = elem.bbox.x2 - elem.bbox.x1;

    let position =
        |end: usize| elem.node.prefix_width(end) / full_width * span_width + elem.bbox.x1;

    let mut end = text_len;
    let x = if full_width > 0.0 {
        let mut last_distance = (position(end) - point.x1).abs();

        while end > 0 {
            let distance = (position(end - 1) - point.x1).abs();
            if distance > last_distance {
                break;
            }
            last_distance = distance;
            end -= 1;
        }

        position(end)
    } else {
        elem.bbox.x1
    };

    Some(Cursor {
        rect: NormalizedRect { x1: x, y1: elem.bbox.y1, x2: x, y2: elem.bbox.y2 },
        node: elem.node.clone(),
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticNode;
    use overlay_geometry::PixelRect;

    fn run(x1: f32, y1: f32, x2: f32, y2: f32, text: &str) -> MeasuredNode<StaticNode> {
        MeasuredNode {
            bbox: NormalizedRect { x1, y1, x2, y2 },
            node: StaticNode::uniform_span(
                PixelRect::new(0.0, 0.0, (x2 - x1) * 1000.0, (y2 - y1) * 1000.0),
                text,
            ),
        }
    }

    #[test]
    fn nearest_picks_the_smaller_vertical_distance() {
        let nodes = vec![
            run(0.0, 0.0, 1.0, 0.10, "upper line"),
            run(0.0, 0.20, 1.0, 0.30, "lower line"),
        ];
        let point = NormalizedPoint::new(0.5, 0.12);

        // Distance 0.02 to the upper line's bottom edge vs 0.08 to the lower
        // line's top edge.
        let found = nearest(&nodes, &point).expect("non-empty input");
        assert_eq!(found.node.text_content(), "upper line");
    }

    #[test]
    fn straddling_run_wins_a_vertical_tie() {
        let nodes = vec![
            run(0.6, 0.0, 0.9, 0.1, "to the right"),
            run(0.2, 0.0, 0.5, 0.1, "straddles"),
        ];
        let point = NormalizedPoint::new(0.3, 0.05);

        let found = nearest(&nodes, &point).expect("non-empty input");
        assert_eq!(found.node.text_content(), "straddles");
    }

    #[test]
    fn horizontal_distance_breaks_remaining_ties() {
        let nodes = vec![
            run(0.7, 0.0, 0.9, 0.1, "far"),
            run(0.35, 0.0, 0.45, 0.1, "near"),
        ];
        let point = NormalizedPoint::new(0.3, 0.05);

        let found = nearest(&nodes, &point).expect("non-empty input");
        assert_eq!(found.node.text_content(), "near");
    }

    #[test]
    fn nearest_of_nothing_is_absent() {
        let nodes: Vec<MeasuredNode<StaticNode>> = Vec::new();
        assert!(nearest(&nodes, &NormalizedPoint::new(0.5, 0.5)).is_none());
        assert!(locate_cursor(&nodes, &NormalizedPoint::new(0.5, 0.5)).is_none());
    }

    #[test]
    fn cursor_refines_to_the_closest_offset() {
        // Ten characters across x in [0, 100]: offset k renders at x = 10k.
        let nodes = vec![run(0.0, 0.0, 100.0, 10.0, "abcdefghij")];
        let point = NormalizedPoint::new(53.0, 5.0);

        let cursor = locate_cursor(&nodes, &point).expect("one run");

        // Offset 5 renders at 50 (distance 3); neighbors 4 and 6 render at
        // 40 and 60 (distances 13 and 7).
        assert_eq!(cursor.end, 5);
        assert_eq!(cursor.rect.x1, 50.0);
        assert_eq!(cursor.rect.x2, cursor.rect.x1);
        assert_eq!(cursor.rect.y1, 0.0);
        assert_eq!(cursor.rect.y2, 10.0);
    }

    #[test]
    fn cursor_left_of_the_run_collapses_to_the_start() {
        let nodes = vec![run(0.2, 0.0, 0.4, 0.1, "abcd")];
        let point = NormalizedPoint::new(0.05, 0.05);

        let cursor = locate_cursor(&nodes, &point).expect("one run");
        assert_eq!(cursor.end, 0);
        assert!((cursor.rect.x1 - 0.2).abs() < 1e-6);
    }

    #[test]
    fn cursor_right_of_the_run_keeps_the_full_range() {
        let nodes = vec![run(0.2, 0.0, 0.4, 0.1, "abcd")];
        let point = NormalizedPoint::new(0.9, 0.05);

        let cursor = locate_cursor(&nodes, &point).expect("one run");
        assert_eq!(cursor.end, 4);
        assert!((cursor.rect.x1 - 0.4).abs() < 1e-6);
    }

    #[test]
    fn zero_width_run_places_the_caret_at_its_left_edge() {
        let nodes = vec![MeasuredNode {
            bbox: NormalizedRect { x1: 0.3, y1: 0.0, x2: 0.3, y2: 0.1 },
            node: StaticNode::uniform_span(PixelRect::new(0.0, 0.0, 0.0, 10.0), ""),
        }];
        let point = NormalizedPoint::new(0.5, 0.05);

        let cursor = locate_cursor(&nodes, &point).expect("one run");
        assert_eq!(cursor.rect.x1, 0.3);
        assert_eq!(cursor.end, 0);
    }
}
