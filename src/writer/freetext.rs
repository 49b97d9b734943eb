//! FreeText annotations used as static form labels.
//!
//! FreeText annotations (PDF spec Section 12.5.6.6) display text directly on
//! the page. Labels are annotations only: they are listed in the page
//! `Annots` but never in the AcroForm `Fields`.

use super::form_fields::{rect_object, text_string};
use crate::geometry::Rect;
use crate::object::{Dictionary, Object, ObjectRef};

/// Default label box width in points.
pub const DEFAULT_LABEL_WIDTH: f32 = 200.0;
/// Default label box height in points.
pub const DEFAULT_LABEL_HEIGHT: f32 = 16.0;

/// A non-interactive text label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnnotation {
    /// Bounding rectangle for the text box
    pub rect: Rect,
    /// Text contents
    pub contents: String,
    /// Font size for the default appearance
    pub font_size: f32,
}

impl LabelAnnotation {
    /// Create a label with a 12 pt font.
    pub fn new(rect: Rect, contents: impl Into<String>) -> Self {
        Self {
            rect,
            contents: contents.into(),
            font_size: 12.0,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Default appearance string: Helvetica at the label size, black.
    pub fn default_appearance(&self) -> String {
        format!("/Helv {} Tf 0 g", self.font_size)
    }

    /// Build the annotation dictionary.
    pub fn build(&self, page: ObjectRef) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.insert("Type".to_string(), Object::Name("Annot".to_string()));
        dict.insert("Subtype".to_string(), Object::Name("FreeText".to_string()));
        dict.insert("Rect".to_string(), rect_object(&self.rect));
        dict.insert("Contents".to_string(), text_string(&self.contents));
        dict.insert(
            "DA".to_string(),
            Object::String(self.default_appearance().into_bytes()),
        );
        dict.insert("P".to_string(), Object::Reference(page));
        // Printable
        dict.insert("F".to_string(), Object::Integer(4));

        // No border around label text
        let mut border = Dictionary::new();
        border.insert("W".to_string(), Object::Integer(0));
        dict.insert("BS".to_string(), Object::Dictionary(border));

        dict
    }
}
