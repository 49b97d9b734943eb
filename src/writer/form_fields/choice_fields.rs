//! Choice field definitions for PDF forms.
//!
//! Implements choice fields per ISO 32000-1:2008 Section 12.7.4.4:
//! - Combo boxes (dropdown lists)
//! - List boxes (scrollable lists)
//!
//! # Example
//!
//! ```
//! use pdf_formgen::writer::form_fields::{ChoiceField, ChoiceKind};
//!
//! let country = ChoiceField::combo("country", ["USA", "Canada", "UK"]).with_value("USA");
//! let interests = ChoiceField::list("interests", ["Sports", "Music"]).multi_select();
//!
//! assert_eq!(country.kind(), ChoiceKind::Combo);
//! assert_eq!(interests.kind(), ChoiceKind::List);
//! ```

use super::field_flags::combine;
use super::{common_entries, text_string, ChoiceFieldFlags, FieldFlags, FormField};
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};

/// Presentation of a choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// Scrollable list box
    List,
    /// Dropdown combo box
    Combo,
}

/// An option in a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Export value (submitted when selected)
    pub export_value: String,
    /// Display text, when it differs from the export value
    pub display_text: Option<String>,
}

impl ChoiceOption {
    /// Create an option whose display text is its export value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            export_value: value.into(),
            display_text: None,
        }
    }

    /// Create an option with distinct export and display values.
    pub fn with_display(export_value: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            export_value: export_value.into(),
            display_text: Some(display_text.into()),
        }
    }

    fn to_object(&self) -> Object {
        match &self.display_text {
            Some(display) => Object::Array(vec![
                text_string(&self.export_value),
                text_string(display),
            ]),
            None => text_string(&self.export_value),
        }
    }
}

impl From<&str> for ChoiceOption {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ChoiceOption {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<(&str, &str)> for ChoiceOption {
    fn from((export_value, display_text): (&str, &str)) -> Self {
        Self::with_display(export_value, display_text)
    }
}

/// A combo box or list box field.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField {
    name: String,
    kind: ChoiceKind,
    options: Vec<ChoiceOption>,
    value: String,
    flags: FieldFlags,
    choice_flags: ChoiceFieldFlags,
    tooltip: Option<String>,
}

impl ChoiceField {
    /// Create a choice field of the given kind.
    pub fn new<I, O>(name: impl Into<String>, kind: ChoiceKind, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<ChoiceOption>,
    {
        Self {
            name: name.into(),
            kind,
            options: options.into_iter().map(Into::into).collect(),
            value: String::new(),
            flags: FieldFlags::empty(),
            choice_flags: ChoiceFieldFlags::empty(),
            tooltip: None,
        }
    }

    /// Create a dropdown combo box.
    pub fn combo<I, O>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<ChoiceOption>,
    {
        Self::new(name, ChoiceKind::Combo, options)
    }

    /// Create a list box.
    pub fn list<I, O>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<ChoiceOption>,
    {
        Self::new(name, ChoiceKind::List, options)
    }

    /// Set the initial selection (an export value, or empty for none).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Allow custom text entry (combo boxes only).
    pub fn editable(mut self) -> Self {
        self.choice_flags |= ChoiceFieldFlags::EDIT;
        self
    }

    /// Write the options sorted by export value.
    pub fn sorted(mut self) -> Self {
        self.choice_flags |= ChoiceFieldFlags::SORT;
        self
    }

    /// Allow multiple selections (list boxes only).
    pub fn multi_select(mut self) -> Self {
        self.choice_flags |= ChoiceFieldFlags::MULTI_SELECT;
        self
    }

    /// Commit the value as soon as the selection changes.
    pub fn commit_on_change(mut self) -> Self {
        self.choice_flags |= ChoiceFieldFlags::COMMIT_ON_SEL_CHANGE;
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

    /// Presentation kind.
    pub fn kind(&self) -> ChoiceKind {
        self.kind
    }

    /// Declared options, in declaration order.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidFieldConfiguration {
            field: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

impl FormField for ChoiceField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &'static str {
        "Ch"
    }

    fn field_flags(&self) -> i64 {
        let mut bits = self.choice_flags;
        if self.kind == ChoiceKind::Combo {
            bits |= ChoiceFieldFlags::COMBO;
        }
        combine(self.flags, bits.bits())
    }

    fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(self.invalid("choice field needs at least one option"));
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i]
                .iter()
                .any(|o| o.export_value == option.export_value)
            {
                return Err(self.invalid("duplicate export value in options"));
            }
        }
        match self.kind {
            ChoiceKind::Combo if self.choice_flags.contains(ChoiceFieldFlags::MULTI_SELECT) => {
                return Err(self.invalid("combo boxes cannot be multi-select"));
            },
            ChoiceKind::List if self.choice_flags.contains(ChoiceFieldFlags::EDIT) => {
                return Err(self.invalid("list boxes cannot be editable"));
            },
            _ => {},
        }
        if !self.value.is_empty() && !self.options.iter().any(|o| o.export_value == self.value) {
            return Err(Error::InvalidFieldValue {
                field: self.name.clone(),
                value: self.value.clone(),
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

        let mut options: Vec<&ChoiceOption> = self.options.iter().collect();
        if self.choice_flags.contains(ChoiceFieldFlags::SORT) {
            options.sort_by(|a, b| a.export_value.cmp(&b.export_value));
        }
        dict.insert(
            "Opt".to_string(),
            Object::Array(options.iter().map(|o| o.to_object()).collect()),
        );
        dict.insert("V".to_string(), text_string(&self.value));
        dict.insert("DV".to_string(), text_string(&self.value));
        dict
    }

    fn has_variable_text(&self) -> bool {
        true
    }
}
