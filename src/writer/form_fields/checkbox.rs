//! Checkbox field definition for PDF forms.
//!
//! Implements checkbox fields per ISO 32000-1:2008 Section 12.7.4.2.3.
//!
//! # Example
//!
//! ```
//! use pdf_formgen::writer::form_fields::CheckboxField;
//!
//! let agree = CheckboxField::new("agree").checked().with_export_value("Agreed");
//! assert!(agree.is_checked());
//! ```

use super::field_flags::combine;
use super::{border_characteristics, common_entries, FieldFlags, FormField};
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};

/// ZapfDingbats check mark.
const CHECK_CAPTION: &str = "4";

/// A checkbox field.
///
/// A button field with neither the radio nor the push-button bit. Its value
/// is the export value when checked and `/Off` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxField {
    name: String,
    export_value: String,
    checked: bool,
    flags: FieldFlags,
    tooltip: Option<String>,
}

impl CheckboxField {
    /// Create an unchecked checkbox with export value `Yes`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            export_value: "Yes".to_string(),
            checked: false,
            flags: FieldFlags::empty(),
            tooltip: None,
        }
    }

    /// Set the checkbox as checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Set initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the export value (value submitted when checked).
    pub fn with_export_value(mut self, value: impl Into<String>) -> Self {
        self.export_value = value.into();
        self
    }

    /// Make the field required.
    pub fn required(mut self) -> Self {
        self.flags |= FieldFlags::REQUIRED;
        self
    }

    /// Make the field read-only.
    pub fn read_only(mut self) -> Self {
        self.flags |= FieldFlags::READ_ONLY;
        self
    }

    /// Leave the field out of submit-form actions.
    pub fn no_export(mut self) -> Self {
        self.flags |= FieldFlags::NO_EXPORT;
        self
    }

    /// Set tooltip text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Get the current checked state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Get the export value.
    pub fn export_value(&self) -> &str {
        &self.export_value
    }

    fn state(&self) -> &str {
        if self.checked {
            &self.export_value
        } else {
            "Off"
        }
    }
}

impl FormField for CheckboxField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &'static str {
        "Btn"
    }

    fn field_flags(&self) -> i64 {
        combine(self.flags, 0)
    }

    fn validate(&self) -> Result<()> {
        if self.export_value.is_empty() || self.export_value == "Off" {
            return Err(Error::InvalidFieldConfiguration {
                field: self.name.clone(),
                reason: format!("export value '{}' cannot name the on state", self.export_value),
            });
        }
        Ok(())
    }

    fn build_field_dict(&self) -> Dictionary {
        let mut dict = common_entries(
            self.field_type(),
            &self.name,
            self.field_flags(),
            self.tooltip.as_deref(),
        );
        dict.insert("V".to_string(), Object::Name(self.state().to_string()));
        dict.insert("DV".to_string(), Object::Name(self.state().to_string()));
        dict
    }

    fn appearance_characteristics(&self) -> Dictionary {
        let mut mk = border_characteristics();
        mk.insert("CA".to_string(), Object::String(CHECK_CAPTION.as_bytes().to_vec()));
        mk
    }

    fn appearance_state(&self) -> Option<String> {
        Some(self.state().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::form_fields::ButtonFieldFlags;

    #[test]
    fn test_unchecked_defaults() {
        let field = CheckboxField::new("CheckBox1");
        let dict = field.build_field_dict();
        assert_eq!(dict.get("FT").and_then(Object::as_name), Some("Btn"));
        assert_eq!(dict.get("V").and_then(Object::as_name), Some("Off"));
        assert_eq!(field.appearance_state().as_deref(), Some("Off"));
    }

    #[test]
    fn test_checked_uses_export_value() {
        let field = CheckboxField::new("agree").checked().with_export_value("Agreed");
        let dict = field.build_field_dict();
        assert_eq!(dict.get("V").and_then(Object::as_name), Some("Agreed"));
        assert_eq!(field.appearance_state().as_deref(), Some("Agreed"));
    }

    #[test]
    fn test_never_radio_or_pushbutton() {
        let field = CheckboxField::new("c").required().read_only();
        let type_bits = (ButtonFieldFlags::RADIO | ButtonFieldFlags::PUSHBUTTON).bits();
        assert_eq!(field.field_flags() & i64::from(type_bits), 0);
        assert_eq!(field.field_flags(), 3);
    }

    #[test]
    fn test_no_export() {
        assert_eq!(CheckboxField::new("c").no_export().field_flags(), 4);
    }

    #[test]
    fn test_off_export_value_rejected() {
        assert!(CheckboxField::new("c").with_export_value("Off").validate().is_err());
        assert!(CheckboxField::new("c").with_export_value("").validate().is_err());
        assert!(CheckboxField::new("c").validate().is_ok());
    }

    #[test]
    fn test_check_caption() {
        let mk = CheckboxField::new("c").appearance_characteristics();
        assert_eq!(mk.get("CA").and_then(Object::as_string), Some(&b"4"[..]));
    }
}
