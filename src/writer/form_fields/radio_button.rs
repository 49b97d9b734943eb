//! Radio button group members for PDF forms.
//!
//! Implements radio buttons per ISO 32000-1:2008 Section 12.7.4.2.4.
//!
//! A group is one parent field holding the value and `Opt`, with one kid
//! widget per button. Every `RadioField` added under the same name becomes
//! another kid of the same parent.
//!
//! # Example
//!
//! ```
//! use pdf_formgen::writer::form_fields::RadioField;
//!
//! let small = RadioField::new("size").with_options(["Small", "Large"]).with_on_state("Small");
//! let large = RadioField::new("size").with_options(["Small", "Large"]).with_on_state("Large");
//! assert_eq!(small.options(), large.options());
//! ```

use super::field_flags::combine;
use super::{
    border_characteristics, common_entries, text_string, ButtonFieldFlags, FieldFlags, FormField,
};
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};

/// ZapfDingbats bullet.
const BULLET_CAPTION: &str = "l";

/// One widget of a radio button group.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioField {
    name: String,
    options: Vec<String>,
    value: String,
    on_state: Option<String>,
    flags: FieldFlags,
    button_flags: ButtonFieldFlags,
    tooltip: Option<String>,
}

impl RadioField {
    /// Create a radio group member with options `[Off, Yes]` and nothing selected.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: vec!["Off".to_string(), "Yes".to_string()],
            value: "Off".to_string(),
            on_state: None,
            flags: FieldFlags::empty(),
            button_flags: ButtonFieldFlags::RADIO,
            tooltip: None,
        }
    }

    /// Set the group's export values (`Opt`).
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the group's initial value; `Off` means nothing selected.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the export value this widget stands for.
    pub fn with_on_state(mut self, state: impl Into<String>) -> Self {
        self.on_state = Some(state.into());
        self
    }

    /// Keep one button selected at all times.
    pub fn no_toggle_to_off(mut self) -> Self {
        self.button_flags |= ButtonFieldFlags::NO_TOGGLE_TO_OFF;
        self
    }

    /// Let buttons sharing an on-state turn on and off together.
    pub fn radios_in_unison(mut self) -> Self {
        self.button_flags |= ButtonFieldFlags::RADIOS_IN_UNISON;
        self
    }

    /// Make the field required.
    pub fn required(mut self) -> Self {
        self.flags |= FieldFlags::REQUIRED;
        self
    }

    /// Leave the group out of submit-form actions.
    pub fn no_export(mut self) -> Self {
        self.flags |= FieldFlags::NO_EXPORT;
        self
    }

    /// Set tooltip text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Export values of the group.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Initial group value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Export value of this widget, if one was given.
    pub fn on_state(&self) -> Option<&str> {
        self.on_state.as_deref()
    }

    /// Whether buttons with equal on-states may coexist in the group.
    pub fn in_unison(&self) -> bool {
        self.button_flags.contains(ButtonFieldFlags::RADIOS_IN_UNISON)
    }

    /// Whether two members describe the same group.
    ///
    /// Members must agree on everything but their own on-state, and either
    /// all of them name an on-state or none does.
    pub fn same_group(&self, other: &RadioField) -> bool {
        self.name == other.name
            && self.options == other.options
            && self.value == other.value
            && self.flags == other.flags
            && self.button_flags == other.button_flags
            && self.on_state.is_some() == other.on_state.is_some()
    }

    fn invalid(&self, reason: impl Into<String>) -> Error {
        Error::InvalidFieldConfiguration {
            field: self.name.clone(),
            reason: reason.into(),
        }
    }
}

impl FormField for RadioField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &'static str {
        "Btn"
    }

    fn field_flags(&self) -> i64 {
        combine(self.flags, self.button_flags.bits())
    }

    fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(self.invalid("radio group needs at least one option"));
        }
        if self.value != "Off" && !self.options.contains(&self.value) {
            return Err(Error::InvalidFieldValue {
                field: self.name.clone(),
                value: self.value.clone(),
            });
        }
        if let Some(state) = &self.on_state {
            if state == "Off" || !self.options.contains(state) {
                return Err(self.invalid(format!("on state '{state}' is not an option")));
            }
        }
        Ok(())
    }

    /// Entries of the shared parent field; the builder fills in `Kids` and
    /// rewrites `Opt` when the kids carry on-states.
    fn build_field_dict(&self) -> Dictionary {
        let mut dict = common_entries(
            self.field_type(),
            &self.name,
            self.field_flags(),
            self.tooltip.as_deref(),
        );
        dict.insert("V".to_string(), Object::Name(self.value.clone()));
        dict.insert("DV".to_string(), Object::Name(self.value.clone()));
        dict.insert(
            "Opt".to_string(),
            Object::Array(self.options.iter().map(|o| text_string(o)).collect()),
        );
        dict.insert("Kids".to_string(), Object::Array(Vec::new()));
        dict
    }

    fn appearance_characteristics(&self) -> Dictionary {
        let mut mk = border_characteristics();
        mk.insert("CA".to_string(), Object::String(BULLET_CAPTION.as_bytes().to_vec()));
        mk
    }

    fn appearance_state(&self) -> Option<String> {
        match &self.on_state {
            Some(state) if *state == self.value => Some(state.clone()),
            _ => Some("Off".to_string()),
        }
    }
}
