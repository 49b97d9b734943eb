//! Interactive form field definitions for PDF generation.
//!
//! Field types per ISO 32000-1:2008 Section 12.7 (Interactive Forms):
//!
//! - **Text** (`TextField`): single-line or multiline text input
//! - **Checkbox** (`CheckboxField`): on/off button
//! - **Radio** (`RadioField`): one widget of a mutually exclusive group
//! - **Choice** (`ChoiceField`): combo box or list box
//! - **Signature** (`SignatureField`): unsigned signature placeholder
//!
//! Every definition converts into a [`FieldSpec`], which is what
//! `DocumentBuilder::add_widget` accepts. The [`FieldFactory`] turns a spec
//! into dictionaries, checking names, options and values on the way.
//!
//! # Example
//!
//! ```
//! use pdf_formgen::writer::form_fields::{CheckboxField, ChoiceField, FieldSpec, TextField};
//!
//! let name: FieldSpec = TextField::new("name").with_value("Jane").required().into();
//! let agree: FieldSpec = CheckboxField::new("agree").checked().into();
//! let pick: FieldSpec = ChoiceField::combo("pick", ["A", "B"]).with_value("A").into();
//!
//! assert_eq!(name.field_type(), "Tx");
//! assert_eq!(agree.field_type(), "Btn");
//! assert_eq!(pick.field_type(), "Ch");
//! ```

mod checkbox;
mod choice_fields;
mod factory;
mod field_flags;
mod radio_button;
mod signature_field;
mod text_field;

pub use checkbox::CheckboxField;
pub use choice_fields::{ChoiceField, ChoiceKind, ChoiceOption};
pub use factory::FieldFactory;
pub(crate) use factory::rect_object;
pub use field_flags::{ButtonFieldFlags, ChoiceFieldFlags, FieldFlags, TextFieldFlags};
pub use radio_button::RadioField;
pub use signature_field::SignatureField;
pub use text_field::TextField;

use crate::error::Result;
use crate::object::{Dictionary, Object};

/// Common interface of all field definitions.
///
/// Implementors describe the field-level half of a widget: the entries that
/// identify the field and hold its value. Widget annotation entries (`Rect`,
/// `P`, `F`, ...) are added by [`FieldFactory`].
pub trait FormField {
    /// Get the partial field name (`T`).
    fn field_name(&self) -> &str;

    /// Get the field type name (Tx, Btn, Ch, Sig).
    fn field_type(&self) -> &'static str;

    /// Get the full `Ff` value, type bits included.
    fn field_flags(&self) -> i64;

    /// Check options and initial value.
    ///
    /// Name checks are shared and live in [`FieldFactory`].
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Build the field dictionary entries.
    fn build_field_dict(&self) -> Dictionary;

    /// Appearance characteristics (`MK`) for the widget.
    fn appearance_characteristics(&self) -> Dictionary {
        border_characteristics()
    }

    /// Initial appearance state (`AS`) for button widgets.
    fn appearance_state(&self) -> Option<String> {
        None
    }

    /// Whether the widget carries variable text and so needs a `DA` entry.
    fn has_variable_text(&self) -> bool {
        false
    }
}

/// A button field: checkbox or radio group member.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonField {
    /// Two-state checkbox
    Checkbox(CheckboxField),
    /// Member of a radio group
    Radio(RadioField),
}

/// Any field accepted by `DocumentBuilder::add_widget`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    /// Text field (FT Tx)
    Text(TextField),
    /// Button field (FT Btn)
    Button(ButtonField),
    /// Choice field (FT Ch)
    Choice(ChoiceField),
    /// Signature field (FT Sig)
    Signature(SignatureField),
}

impl FieldSpec {
    /// Borrow the definition behind this spec.
    pub fn as_form_field(&self) -> &dyn FormField {
        match self {
            FieldSpec::Text(f) => f,
            FieldSpec::Button(ButtonField::Checkbox(f)) => f,
            FieldSpec::Button(ButtonField::Radio(f)) => f,
            FieldSpec::Choice(f) => f,
            FieldSpec::Signature(f) => f,
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        self.as_form_field().field_name()
    }

    /// Field type code.
    pub fn field_type(&self) -> &'static str {
        self.as_form_field().field_type()
    }

    /// Full `Ff` value.
    pub fn field_flags(&self) -> i64 {
        self.as_form_field().field_flags()
    }

    /// The radio definition, if this spec is a radio group member.
    pub fn as_radio(&self) -> Option<&RadioField> {
        match self {
            FieldSpec::Button(ButtonField::Radio(r)) => Some(r),
            _ => None,
        }
    }

    /// Whether this is a signature field.
    pub fn is_signature(&self) -> bool {
        matches!(self, FieldSpec::Signature(_))
    }
}

impl From<TextField> for FieldSpec {
    fn from(field: TextField) -> Self {
        FieldSpec::Text(field)
    }
}

impl From<CheckboxField> for FieldSpec {
    fn from(field: CheckboxField) -> Self {
        FieldSpec::Button(ButtonField::Checkbox(field))
    }
}

impl From<RadioField> for FieldSpec {
    fn from(field: RadioField) -> Self {
        FieldSpec::Button(ButtonField::Radio(field))
    }
}

impl From<ChoiceField> for FieldSpec {
    fn from(field: ChoiceField) -> Self {
        FieldSpec::Choice(field)
    }
}

impl From<SignatureField> for FieldSpec {
    fn from(field: SignatureField) -> Self {
        FieldSpec::Signature(field)
    }
}

/// Encode text as a PDF text string.
///
/// ASCII is written as-is; anything else becomes UTF-16BE with a byte order
/// mark, which every reader accepts for text strings.
pub(crate) fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        Object::String(text.as_bytes().to_vec())
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes)
    }
}

/// Entries every field dictionary carries: `FT`, `T`, `Ff` and optional `TU`.
pub(crate) fn common_entries(
    field_type: &str,
    name: &str,
    flags: i64,
    tooltip: Option<&str>,
) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert("FT".to_string(), Object::Name(field_type.to_string()));
    dict.insert("T".to_string(), text_string(name));
    dict.insert("Ff".to_string(), Object::Integer(flags));
    if let Some(tooltip) = tooltip {
        dict.insert("TU".to_string(), text_string(tooltip));
    }
    dict
}

/// Black border on a white background.
pub(crate) fn border_characteristics() -> Dictionary {
    let mut mk = Dictionary::new();
    mk.insert("BC".to_string(), gray(0.0));
    mk.insert("BG".to_string(), gray(1.0));
    mk
}

fn gray(level: f64) -> Object {
    Object::Array(vec![Object::Real(level); 3])
}
