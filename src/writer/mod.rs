//! PDF writing module for generating form documents.
//!
//! ## Architecture
//!
//! ```text
//! FieldSpec / label text
//!     ↓
//! [DocumentBuilder] (validates input, links the object graph)
//!     ↓                ↘
//! [FieldFactory]       [ObjectStore] (numbers indirect objects)
//!     ↓
//! [Document] (finalized graph)
//!     ↓
//! [Serializer] (body, xref table, trailer) → [ObjectSerializer] (single objects)
//!     ↓
//! [write_atomic] (temp file + rename)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use pdf_formgen::geometry::Rect;
//! use pdf_formgen::writer::DocumentBuilder;
//! use pdf_formgen::writer::form_fields::{RadioField, TextField};
//!
//! let mut builder = DocumentBuilder::new()?;
//! builder.add_widget(TextField::new("TextField1"), Rect::new(50.0, 700.0, 300.0, 24.0))?;
//! builder.add_widget(RadioField::new("RadioGroup1"), Rect::new(50.0, 600.0, 20.0, 20.0))?;
//! builder.add_widget(RadioField::new("RadioGroup1"), Rect::new(100.0, 600.0, 20.0, 20.0))?;
//! builder.finalize()?.save("WidgetTest.pdf")?;
//! # Ok::<(), pdf_formgen::Error>(())
//! ```

mod acroform;
mod document_builder;
mod file_writer;
pub mod form_fields;
mod freetext;
mod object_serializer;
mod serializer;

pub use acroform::{standard_font, AcroFormBuilder, FontResources};
pub use document_builder::{Document, DocumentBuilder};
pub use file_writer::write_atomic;
pub use form_fields::{
    ButtonField, CheckboxField, ChoiceField, ChoiceKind, ChoiceOption, FieldFactory, FieldSpec,
    FormField, RadioField, SignatureField, TextField,
};
pub use freetext::{LabelAnnotation, DEFAULT_LABEL_HEIGHT, DEFAULT_LABEL_WIDTH};
pub use object_serializer::ObjectSerializer;
pub use serializer::{Serializer, XrefEntry};
