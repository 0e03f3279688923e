//! Overlay Engine Core
//!
//! Span indexing, containment resolution, fuzzy text matching, and caret
//! location over an abstract layout tree. Every operation is a pure pass over
//! caller-supplied data; the engine holds no state between calls.

pub mod containment;
pub mod cursor;
pub mod layout;
pub mod search;
pub mod span_index;
pub mod text_match;

pub use containment::{annotated_spans, span_within_annotation};
pub use cursor::{locate_cursor, nearest, Cursor};
pub use layout::{LayoutNode, StaticNode};
pub use search::{resolve_search_highlight, SearchHighlight};
pub use span_index::{index_spans, MeasuredNode};
pub use text_match::{default_stop_words, find_overlapping_spans, overlap_score, DEFAULT_STOP_WORDS};

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("no content element found in text layer container")]
    NoContentLayer,
    #[error(transparent)]
    Geometry(#[from] overlay_geometry::GeometryError),
}
