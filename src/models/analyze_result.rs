use std::fmt;

use serde::{Deserialize, Serialize};

/// Completed result of a layout analysis operation.
///
/// This is the typed form of the `analyzeResult` payload the service returns
/// once polling reports `succeeded`. Words and lines on a page are produced
/// independently from the same content stream; a word is related to a line
/// only through span containment (see [`crate::layout::words_in_line`]).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AnalyzeResult {
    pub api_version: String,
    pub model_id: String,
    pub content: String,
    pub pages: Vec<DocumentPage>,
    pub styles: Option<Vec<DocumentStyle>>,
    pub tables: Option<Vec<DocumentTable>>,
}

impl AnalyzeResult {
    /// True when any observed text style is handwritten.
    pub fn contains_handwriting(&self) -> bool {
        self.styles
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|style| style.is_handwritten.unwrap_or(false))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentPage {
    pub page_number: i32,
    pub angle: Option<f32>,
    pub width: f32,
    pub height: f32,
    pub unit: String,
    pub words: Option<Vec<DocumentWord>>,
    pub lines: Option<Vec<DocumentLine>>,
    pub selection_marks: Option<Vec<DocumentSelectionMark>>,
    pub spans: Vec<DocumentSpan>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentLine {
    pub content: String,
    // The service sends polygons as a flat [x, y, x, y, ...] list.
    pub polygon: Option<Vec<f32>>,
    pub spans: Vec<DocumentSpan>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentWord {
    pub content: String,
    pub polygon: Option<Vec<f32>>,
    pub span: DocumentSpan,
    pub confidence: f32,
}

/// Half-open interval `[offset, offset + length)` over the document's
/// content stream.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentSpan {
    pub offset: usize,
    pub length: usize,
}

impl DocumentSpan {
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// True when `other` is entirely inside this span. Boundary-exact
    /// containment counts; any overhang on either side does not.
    pub fn contains(&self, other: &DocumentSpan) -> bool {
        other.offset >= self.offset && other.end() <= self.end()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentSelectionMark {
    pub state: SelectionMarkState,
    pub polygon: Option<Vec<f32>>,
    pub span: DocumentSpan,
    pub confidence: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMarkState {
    Selected,
    Unselected,
}

impl fmt::Display for SelectionMarkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMarkState::Selected => write!(f, "selected"),
            SelectionMarkState::Unselected => write!(f, "unselected"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentStyle {
    pub is_handwritten: Option<bool>,
    pub spans: Vec<DocumentSpan>,
    pub confidence: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentTable {
    pub row_count: i32,
    pub column_count: i32,
    pub cells: Vec<DocumentTableCell>,
    pub bounding_regions: Option<Vec<BoundingRegion>>,
    pub spans: Vec<DocumentSpan>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentTableCell {
    pub row_index: i32,
    pub column_index: i32,
    pub content: String,
    pub bounding_regions: Option<Vec<BoundingRegion>>,
    pub spans: Vec<DocumentSpan>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct BoundingRegion {
    pub page_number: i32,
    pub polygon: Vec<f32>,
}
