//! Builds field and widget dictionaries from field definitions.

use super::{text_string, FieldSpec, FormField, RadioField};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::object::{Dictionary, Object, ObjectRef};

/// Annotation flag bit 3: print the widget.
const PRINT_FLAG: i64 = 4;

/// Turns [`FieldSpec`]s into dictionaries.
///
/// Text and choice widgets get `DA` from the factory, so every widget in a
/// document shares one default appearance.
#[derive(Debug, Clone)]
pub struct FieldFactory {
    default_appearance: String,
}

impl FieldFactory {
    /// Create a factory writing `default_appearance` into variable-text widgets.
    pub fn new(default_appearance: impl Into<String>) -> Self {
        Self {
            default_appearance: default_appearance.into(),
        }
    }

    /// Check a spec without building anything.
    pub fn validate(&self, spec: &FieldSpec) -> Result<()> {
        let field = spec.as_form_field();
        validate_name(field.field_name())?;
        field.validate()
    }

    /// Build a merged field/widget dictionary for a non-radio spec.
    ///
    /// Radio members are split into a parent field and kid widgets; use
    /// [`build_radio_parent`](Self::build_radio_parent) and
    /// [`build_radio_kid`](Self::build_radio_kid) for those.
    pub fn build_field(&self, spec: &FieldSpec, rect: Rect, page: ObjectRef) -> Result<Dictionary> {
        if let Some(radio) = spec.as_radio() {
            return Err(Error::InvalidFieldConfiguration {
                field: radio.field_name().to_string(),
                reason: "radio members are built as parent and kid widgets".to_string(),
            });
        }
        self.validate(spec)?;

        let field = spec.as_form_field();
        let mut dict = field.build_field_dict();
        dict.extend(self.build_widget(field, rect, page));
        Ok(dict)
    }

    /// Build the parent field of a radio group.
    ///
    /// `on_states` is either empty or holds one entry per kid. When present
    /// it replaces `Opt`, so kid `i` exports `Opt[i]` even while it is off.
    pub fn build_radio_parent(
        &self,
        radio: &RadioField,
        kids: &[ObjectRef],
        on_states: &[String],
    ) -> Result<Dictionary> {
        validate_name(radio.field_name())?;
        radio.validate()?;
        if !on_states.is_empty() && on_states.len() != kids.len() {
            return Err(Error::InvalidFieldConfiguration {
                field: radio.field_name().to_string(),
                reason: "every kid needs an on state once one has it".to_string(),
            });
        }

        let mut dict = radio.build_field_dict();
        dict.insert(
            "Kids".to_string(),
            Object::Array(kids.iter().map(|r| Object::Reference(*r)).collect()),
        );
        if !on_states.is_empty() {
            dict.insert(
                "Opt".to_string(),
                Object::Array(on_states.iter().map(|s| text_string(s)).collect()),
            );
        }
        Ok(dict)
    }

    /// Build one kid widget of a radio group.
    pub fn build_radio_kid(
        &self,
        radio: &RadioField,
        parent: ObjectRef,
        rect: Rect,
        page: ObjectRef,
    ) -> Result<Dictionary> {
        validate_name(radio.field_name())?;
        radio.validate()?;
        let mut dict = self.build_widget(radio, rect, page);
        dict.insert("Parent".to_string(), Object::Reference(parent));
        Ok(dict)
    }

    /// Widget annotation entries shared by all field types.
    fn build_widget(&self, field: &dyn FormField, rect: Rect, page: ObjectRef) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("Type".to_string(), Object::Name("Annot".to_string()));
        dict.insert("Subtype".to_string(), Object::Name("Widget".to_string()));
        dict.insert("Rect".to_string(), rect_object(&rect));
        dict.insert("P".to_string(), Object::Reference(page));
        dict.insert("F".to_string(), Object::Integer(PRINT_FLAG));
        dict.insert("MK".to_string(), Object::Dictionary(field.appearance_characteristics()));
        if let Some(state) = field.appearance_state() {
            dict.insert("AS".to_string(), Object::Name(state));
        }
        if field.has_variable_text() {
            dict.insert(
                "DA".to_string(),
                Object::String(self.default_appearance.as_bytes().to_vec()),
            );
        }
        dict
    }
}

impl Default for FieldFactory {
    fn default() -> Self {
        Self::new("/Helv 12 Tf 0 g")
    }
}

/// `[llx lly urx ury]` as reals.
pub(crate) fn rect_object(rect: &Rect) -> Object {
    Object::Array(
        rect.to_corners()
            .iter()
            .map(|&v| Object::Real(f64::from(v)))
            .collect(),
    )
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "field name must not be empty"
    } else if name.contains('.') {
        "field name must not contain '.'"
    } else {
        return Ok(());
    };
    Err(Error::InvalidFieldConfiguration {
        field: name.to_string(),
        reason: reason.to_string(),
    })
}
