//! AcroForm builder for interactive PDF forms.
//!
//! Implements the document-level AcroForm dictionary per ISO 32000-1:2008 Section 12.7.2.
//!
//! The AcroForm dictionary is stored in the document catalog and contains:
//! - References to all root-level form fields
//! - Default resources (the standard form fonts)
//! - Default appearance string
//! - Signature flags
//!
//! # Example
//!
//! ```
//! use pdf_formgen::object::ObjectRef;
//! use pdf_formgen::writer::{AcroFormBuilder, FontResources};
//!
//! let mut acroform = AcroFormBuilder::new().with_default_appearance("/Helv 10 Tf 0 g");
//! acroform.add_field(ObjectRef::new(8, 0));
//!
//! let fonts = FontResources::new(ObjectRef::new(6, 0), ObjectRef::new(7, 0));
//! let dict = acroform.build(&fonts);
//! assert!(dict.contains_key("Fields"));
//! ```

use crate::object::{Dictionary, Object, ObjectRef};

/// Signature flag bit 1: the document contains signature fields.
const SIGNATURES_EXIST: u32 = 1;

/// The standard fonts every form document references.
///
/// `Helv` (Helvetica) renders variable text, `ZaDb` (ZapfDingbats) renders
/// check marks and radio bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontResources {
    /// Helvetica font object
    pub helv: ObjectRef,
    /// ZapfDingbats font object
    pub zadb: ObjectRef,
}

impl FontResources {
    /// Pair up the two font objects.
    pub fn new(helv: ObjectRef, zadb: ObjectRef) -> Self {
        Self { helv, zadb }
    }

    /// `<< /Helv .. /ZaDb .. >>`, shared by `DR` and page resources.
    pub fn font_dict(&self) -> Dictionary {
        let mut font = Dictionary::new();
        font.insert("Helv".to_string(), Object::Reference(self.helv));
        font.insert("ZaDb".to_string(), Object::Reference(self.zadb));
        font
    }

    /// A resource dictionary with only the `Font` entry.
    pub fn resources(&self) -> Dictionary {
        let mut resources = Dictionary::new();
        resources.insert("Font".to_string(), Object::Dictionary(self.font_dict()));
        resources
    }
}

/// Type1 font dictionary for one of the standard 14 fonts.
pub fn standard_font(base_font: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert("Type".to_string(), Object::Name("Font".to_string()));
    dict.insert("Subtype".to_string(), Object::Name("Type1".to_string()));
    dict.insert("BaseFont".to_string(), Object::Name(base_font.to_string()));
    // ZapfDingbats has its own built-in encoding.
    if base_font != "ZapfDingbats" {
        dict.insert("Encoding".to_string(), Object::Name("WinAnsiEncoding".to_string()));
    }
    dict
}

/// Builder for the document-level AcroForm dictionary.
#[derive(Debug, Clone)]
pub struct AcroFormBuilder {
    /// Root-level field object references
    fields: Vec<ObjectRef>,
    /// Whether viewers should synthesize appearances
    need_appearances: bool,
    /// Signature flags
    sig_flags: Option<u32>,
    /// Default appearance string
    default_appearance: String,
}

impl Default for AcroFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AcroFormBuilder {
    /// Create an empty AcroForm with `NeedAppearances` set.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            need_appearances: true,
            sig_flags: None,
            default_appearance: "/Helv 12 Tf 0 g".to_string(),
        }
    }

    /// Add a root-level field reference.
    pub fn add_field(&mut self, field_ref: ObjectRef) {
        self.fields.push(field_ref);
    }

    /// Set the NeedAppearances flag explicitly.
    ///
    /// No appearance streams are generated here, so this is left on unless
    /// the caller supplies appearances some other way.
    pub fn with_need_appearances(mut self, need: bool) -> Self {
        self.need_appearances = need;
        self
    }

    /// Set the default appearance string.
    ///
    /// Format: "/FontName size Tf gray g" (e.g., "/Helv 12 Tf 0 g")
    pub fn with_default_appearance(mut self, da: impl Into<String>) -> Self {
        self.default_appearance = da.into();
        self
    }

    /// Mark the document as containing signature fields.
    pub fn mark_signatures_exist(&mut self) {
        self.sig_flags = Some(self.sig_flags.unwrap_or(0) | SIGNATURES_EXIST);
    }

    /// Root-level field references, in insertion order.
    pub fn fields(&self) -> &[ObjectRef] {
        &self.fields
    }

    /// Check if this form has any fields.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Build the AcroForm dictionary.
    pub fn build(&self, fonts: &FontResources) -> Dictionary {
        let mut dict = Dictionary::new();

        let fields: Vec<Object> = self.fields.iter().map(|r| Object::Reference(*r)).collect();
        dict.insert("Fields".to_string(), Object::Array(fields));

        if self.need_appearances {
            dict.insert("NeedAppearances".to_string(), Object::Boolean(true));
        }

        if let Some(flags) = self.sig_flags {
            dict.insert("SigFlags".to_string(), Object::Integer(i64::from(flags)));
        }

        dict.insert(
            "DA".to_string(),
            Object::String(self.default_appearance.as_bytes().to_vec()),
        );
        dict.insert("DR".to_string(), Object::Dictionary(fonts.resources()));

        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts() -> FontResources {
        FontResources::new(ObjectRef::new(6, 0), ObjectRef::new(7, 0))
    }

    #[test]
    fn test_empty_acroform() {
        let dict = AcroFormBuilder::new().build(&fonts());
        assert_eq!(dict.get("Fields").and_then(Object::as_array).map(Vec::len), Some(0));
        assert_eq!(dict.get("NeedAppearances").and_then(Object::as_bool), Some(true));
        assert!(!dict.contains_key("SigFlags"));
    }

    #[test]
    fn test_fields_in_order() {
        let mut builder = AcroFormBuilder::new();
        builder.add_field(ObjectRef::new(9, 0));
        builder.add_field(ObjectRef::new(8, 0));
        let dict = builder.build(&fonts());
        let fields = dict.get("Fields").and_then(Object::as_array).unwrap();
        assert_eq!(fields[0].as_reference(), Some(ObjectRef::new(9, 0)));
        assert_eq!(fields[1].as_reference(), Some(ObjectRef::new(8, 0)));
    }

    #[test]
    fn test_signature_flags() {
        let mut builder = AcroFormBuilder::new();
        builder.mark_signatures_exist();
        builder.mark_signatures_exist();
        let dict = builder.build(&fonts());
        assert_eq!(dict.get("SigFlags").and_then(Object::as_integer), Some(1));
    }

    #[test]
    fn test_default_resources() {
        let dict = AcroFormBuilder::new().build(&fonts());
        let font = dict
            .get("DR")
            .and_then(Object::as_dict)
            .and_then(|dr| dr.get("Font"))
            .and_then(Object::as_dict)
            .unwrap();
        assert_eq!(font.get("Helv").and_then(Object::as_reference), Some(ObjectRef::new(6, 0)));
        assert_eq!(font.get("ZaDb").and_then(Object::as_reference), Some(ObjectRef::new(7, 0)));
    }

    #[test]
    fn test_standard_font() {
        let helv = standard_font("Helvetica");
        assert_eq!(helv.get("BaseFont").and_then(Object::as_name), Some("Helvetica"));
        assert!(helv.contains_key("Encoding"));
        assert!(!standard_font("ZapfDingbats").contains_key("Encoding"));
    }
}
