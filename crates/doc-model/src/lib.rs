//! Annotation, search, and citation data model
//!
//! The shapes the document subsystem sends across the host boundary as JSON.
//! Geometry lives in normalized space so records survive re-renders at any
//! zoom; nothing here is mutated after construction.

use overlay_geometry::NormalizedRect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the viewer's annotation tooling is currently operating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationMode {
    Disabled,
    MultiStep,
    Coarse,
    Fine,
}

/// One sentence of fine-grained highlighting with per-fragment boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub boxes: Vec<NormalizedRect>,
}

/// A user-visible annotation over one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(flatten)]
    pub rect: NormalizedRect,
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<Sentence>,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationGroup {
    #[serde(rename = "annotationsGroup")]
    pub annotations: Vec<Annotation>,
    pub id: Uuid,
}

impl AnnotationGroup {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self { annotations, id: Uuid::new_v4() }
    }
}

/// A search hit candidate to reconcile against rendered spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    #[serde(flatten)]
    pub rect: NormalizedRect,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub text: String,
}

/// All search hits on one page, with character offsets into the page text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMatches {
    #[serde(rename = "boundingBoxes")]
    pub bounding_boxes: Vec<SearchMatch>,
    pub page: u32,
    pub matches: Vec<usize>,
    #[serde(rename = "matchesLength")]
    pub match_lengths: Vec<usize>,
}

/// A bounding box in the citation wire format: page plus min/max fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub page: u32,
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

/// A spreadsheet cell target for citations into tabular documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub sheet: String,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ReferenceValue {
    BoundingBox(BoundingBox),
    Cell(Cell),
}

/// One reference inside a citation: a document location plus the cited text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub value: ReferenceValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub doc_id: String,
    pub filename: String,
    pub references: Vec<Reference>,
}

/// Collapse same-page bounding-box references into one region.
///
/// The result covers every input box (min of the mins, max of the maxes),
/// concatenates cited texts space-joined in input order, and flattens
/// highlight fragments in input order. Callers pre-group by page; the page of
/// the first bounding-box reference wins. Cell references carry no geometry
/// and are skipped. Returns `None` when no bounding-box reference is present.
pub fn union_references(references: &[Reference]) -> Option<Reference> {
    let mut boxes = references.iter().filter_map(|reference| match &reference.value {
        ReferenceValue::BoundingBox(value) => Some(*value),
        ReferenceValue::Cell(_) => None,
    });

    let first = boxes.next()?;
    let merged = boxes.fold(first, |acc, value| BoundingBox {
        page: acc.page,
        x_min: acc.x_min.min(value.x_min),
        x_max: acc.x_max.max(value.x_max),
        y_min: acc.y_min.min(value.y_min),
        y_max: acc.y_max.max(value.y_max),
    });

    let text: Vec<&str> = references
        .iter()
        .filter_map(|reference| reference.text.as_deref())
        .collect();
    let highlight: Vec<String> = references
        .iter()
        .filter_map(|reference| reference.highlight.as_deref())
        .flatten()
        .cloned()
        .collect();

    Some(Reference {
        highlight: Some(highlight),
        text: Some(text.join(" ")),
        value: ReferenceValue::BoundingBox(merged),
    })
}
