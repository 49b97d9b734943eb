//! # PDF Formgen
//!
//! Builds one-page PDF documents with interactive AcroForm fields and writes
//! them without any platform document framework.
//!
//! ## Core Features
//!
//! - **Object Model**: strongly typed PDF objects and an object store that
//!   numbers indirect objects contiguously from 1
//! - **Form Fields**: text, checkbox, radio group, combo/list choice and
//!   signature fields, validated when they are added (ISO 32000-1:2008 §12.7)
//! - **Labels**: FreeText annotations for static captions
//! - **Serialization**: deterministic output with an exact cross-reference
//!   table; optional FlateDecode stream compression
//! - **Atomic Output**: files are written through a temporary file and
//!   renamed into place, never left half-written
//!
//! ## Quick Start
//!
//! ```
//! use pdf_formgen::geometry::{Point, Rect};
//! use pdf_formgen::writer::DocumentBuilder;
//! use pdf_formgen::writer::form_fields::{ChoiceField, TextField};
//!
//! # fn main() -> pdf_formgen::Result<()> {
//! let mut builder = DocumentBuilder::new()?;
//! builder.add_label("Name:", Point::new(50.0, 726.0))?;
//! builder.add_widget(TextField::new("name"), Rect::new(50.0, 700.0, 300.0, 24.0))?;
//! builder.add_widget(
//!     ChoiceField::combo("color", ["Red", "Green"]).with_value("Red"),
//!     Rect::new(50.0, 650.0, 200.0, 24.0),
//! )?;
//!
//! let bytes = builder.finalize()?.to_bytes()?;
//! assert!(bytes.ends_with(b"%%EOF\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: object allocation and widget
//! additions at `debug`, per-object serialization at `trace`, and objects
//! that are unreachable from the catalog at `warn`. Install any logger (for
//! example `env_logger`) to see them.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Object model
pub mod object;
pub mod store;

// Page geometry
pub mod geometry;

// Configuration
pub mod config;

// PDF writing
pub mod writer;

pub use config::{DocumentConfig, PageSize};
pub use error::{Error, Result};
pub use object::{Dictionary, Object, ObjectRef};
pub use store::{IndirectObject, ObjectStore};
pub use writer::{Document, DocumentBuilder};
