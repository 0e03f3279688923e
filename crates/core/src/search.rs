//! Search-match reconciliation
//!
//! Search hits arrive as normalized boxes with the matched text. Once the
//! covered spans are resolved, this decides which of them get the strong
//! highlight treatment: only spans of the active match whose text and the
//! match text plausibly show the same thing.

use crate::layout::LayoutNode;
use overlay_model::SearchMatch;

/// A span's disposition after reconciling a search match.
#[derive(Debug, Clone)]
pub struct SearchHighlight<N> {
    pub node: N,
    /// Strong highlight: the match is active and span and match text contain
    /// one another (either direction, case-insensitive).
    pub emphasized: bool,
}

/// Classify spans already resolved inside a search match's box.
pub fn resolve_search_highlight<N: LayoutNode>(
    spans: &[N],
    search: &SearchMatch,
) -> Vec<SearchHighlight<N>> {
    let needle = search.text.to_lowercase();

    spans
        .iter()
        .map(|span| {
            let span_text = span.text_content().to_lowercase();
            let emphasized = search.active
                && (span_text.contains(&needle) || needle.contains(&span_text));

            SearchHighlight { node: span.clone(), emphasized }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticNode;
    use overlay_geometry::{NormalizedRect, PixelRect};

    fn span(text: &str) -> StaticNode {
        StaticNode::uniform_span(PixelRect::new(0.0, 0.0, 80.0, 12.0), text)
    }

    fn search(text: &str, active: bool) -> SearchMatch {
        SearchMatch {
            rect: NormalizedRect { x1: 0.1, y1: 0.1, x2: 0.4, y2: 0.15 },
            active,
            text: text.to_owned(),
        }
    }

    #[test]
    fn active_match_emphasizes_containing_spans() {
        let spans = vec![span("Force Majeure Events"), span("unrelated heading")];

        let highlights = resolve_search_highlight(&spans, &search("force majeure", true));

        assert_eq!(highlights.len(), 2);
        assert!(highlights[0].emphasized);
        assert!(!highlights[1].emphasized);
    }

    #[test]
    fn containment_works_in_either_direction() {
        // The span shows a fragment of the longer query text.
        let spans = vec![span("majeure")];

        let highlights = resolve_search_highlight(&spans, &search("force majeure", true));
        assert!(highlights[0].emphasized);
    }

    #[test]
    fn inactive_matches_are_never_emphasized() {
        let spans = vec![span("force majeure")];

        let highlights = resolve_search_highlight(&spans, &search("force majeure", false));
        assert_eq!(highlights.len(), 1);
        assert!(!highlights[0].emphasized);
    }
}
