//! Signature field placeholder (FT Sig).
//!
//! The field is written unsigned: no `V`, no signature dictionary. Adding one
//! sets `SigFlags` on the AcroForm.

use super::{common_entries, FieldFlags, FormField};
use crate::object::{Dictionary, Object};

/// An unsigned signature field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureField {
    name: String,
    flags: FieldFlags,
    tooltip: Option<String>,
}

impl SignatureField {
    /// Create a signature field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Make the field required.
    pub fn required(mut self) -> Self {
        self.flags |= FieldFlags::REQUIRED;
        self
    }

    /// Set tooltip text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

impl FormField for SignatureField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &'static str {
        "Sig"
    }

    fn field_flags(&self) -> i64 {
        i64::from(self.flags.bits())
    }

    fn build_field_dict(&self) -> Dictionary {
        common_entries(
            self.field_type(),
            &self.name,
            self.field_flags(),
            self.tooltip.as_deref(),
        )
    }

    fn appearance_characteristics(&self) -> Dictionary {
        let mut mk = Dictionary::new();
        mk.insert("BC".to_string(), Object::Array(vec![Object::Real(0.0); 3]));
        mk
    }
}
