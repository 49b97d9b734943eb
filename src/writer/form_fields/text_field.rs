//! Text field definition for PDF forms.
//!
//! Implements text fields per ISO 32000-1:2008 Section 12.7.4.3.

use super::field_flags::combine;
use super::{common_entries, text_string, FieldFlags, FormField, TextFieldFlags};
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};

/// A text input field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextField {
    name: String,
    value: String,
    flags: FieldFlags,
    text_flags: TextFieldFlags,
    max_len: Option<u32>,
    tooltip: Option<String>,
}

impl TextField {
    /// Create an empty text field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Limit the value to `max_len` characters.
    pub fn with_max_len(mut self, max_len: u32) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Allow multiple lines of text.
    pub fn multiline(mut self) -> Self {
        self.text_flags |= TextFieldFlags::MULTILINE;
        self
    }

    /// Mask input as a password.
    pub fn password(mut self) -> Self {
        self.text_flags |= TextFieldFlags::PASSWORD;
        self
    }

    /// Turn off spell checking in the viewer.
    pub fn do_not_spell_check(mut self) -> Self {
        self.text_flags |= TextFieldFlags::DO_NOT_SPELL_CHECK;
        self
    }

    /// Stop input once the visible area is full.
    pub fn do_not_scroll(mut self) -> Self {
        self.text_flags |= TextFieldFlags::DO_NOT_SCROLL;
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

    /// Initial value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FormField for TextField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &'static str {
        "Tx"
    }

    fn field_flags(&self) -> i64 {
        combine(self.flags, self.text_flags.bits())
    }

    fn validate(&self) -> Result<()> {
        if let Some(max_len) = self.max_len {
            if self.value.chars().count() > max_len as usize {
                return Err(Error::InvalidFieldValue {
                    field: self.name.clone(),
                    value: self.value.clone(),
                });
            }
        }
        if self.text_flags.contains(TextFieldFlags::MULTILINE | TextFieldFlags::PASSWORD) {
            return Err(Error::InvalidFieldConfiguration {
                field: self.name.clone(),
                reason: "password fields cannot be multiline".to_string(),
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
        dict.insert("V".to_string(), text_string(&self.value));
        dict.insert("DV".to_string(), text_string(&self.value));
        if let Some(max_len) = self.max_len {
            dict.insert("MaxLen".to_string(), Object::Integer(i64::from(max_len)));
        }
        dict
    }

    fn has_variable_text(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_written() {
        let dict = TextField::new("TextField1").build_field_dict();
        assert_eq!(dict.get("FT").and_then(Object::as_name), Some("Tx"));
        assert_eq!(dict.get("V").and_then(Object::as_string), Some(&b""[..]));
        assert_eq!(dict.get("Ff").and_then(Object::as_integer), Some(0));
        assert!(!dict.contains_key("MaxLen"));
    }

    #[test]
    fn test_flags() {
        let field = TextField::new("notes").multiline().required();
        assert_eq!(field.field_flags(), (1 << 12) | 2);
    }

    #[test]
    fn test_editing_flags() {
        let field = TextField::new("code").do_not_spell_check().do_not_scroll().no_export();
        assert_eq!(field.field_flags(), (1 << 22) | (1 << 23) | 4);
    }

    #[test]
    fn test_max_len_enforced() {
        let field = TextField::new("zip").with_max_len(5).with_value("123456");
        assert!(matches!(
            field.validate(),
            Err(Error::InvalidFieldValue { ref field, .. }) if field == "zip"
        ));

        let ok = TextField::new("zip").with_max_len(5).with_value("12345");
        assert!(ok.validate().is_ok());
        assert_eq!(
            ok.build_field_dict().get("MaxLen").and_then(Object::as_integer),
            Some(5)
        );
    }

    #[test]
    fn test_password_multiline_rejected() {
        let field = TextField::new("pw").password().multiline();
        assert!(matches!(
            field.validate(),
            Err(Error::InvalidFieldConfiguration { .. })
        ));
    }
}
