//! Form document builder.
//!
//! Assembles the object graph of a one-page form document:
//!
//! ```text
//! Catalog ─┬─ Pages ── Page ─┬─ Contents
//!          │                 ├─ Resources (Helv, ZaDb)
//!          │                 └─ Annots ── widgets, labels
//!          └─ AcroForm ─┬─ Fields ── fields, radio parents ── Kids
//!                       └─ DR (Helv, ZaDb)
//! ```
//!
//! Every `add_*` call validates its input before allocating anything, so a
//! failed call leaves the document exactly as it was.
//!
//! # Example
//!
//! ```
//! use pdf_formgen::geometry::{Point, Rect};
//! use pdf_formgen::writer::DocumentBuilder;
//! use pdf_formgen::writer::form_fields::{CheckboxField, TextField};
//!
//! let mut builder = DocumentBuilder::new()?;
//! builder.add_label("Name:", Point::new(50.0, 726.0))?;
//! builder.add_widget(TextField::new("name"), Rect::new(50.0, 700.0, 300.0, 24.0))?;
//! builder.add_widget(CheckboxField::new("agree"), Rect::new(50.0, 650.0, 20.0, 20.0))?;
//!
//! let document = builder.finalize()?;
//! let bytes = document.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! # Ok::<(), pdf_formgen::Error>(())
//! ```

use super::acroform::{standard_font, AcroFormBuilder, FontResources};
use super::file_writer::write_atomic;
use super::form_fields::{text_string, FieldFactory, FieldSpec, FormField, RadioField};
use super::freetext::{LabelAnnotation, DEFAULT_LABEL_HEIGHT, DEFAULT_LABEL_WIDTH};
use super::object_serializer::ObjectSerializer;
use super::serializer::{Serializer, XrefEntry};
use crate::config::DocumentConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::object::{Object, ObjectRef};
use crate::store::ObjectStore;
use std::collections::HashMap;
use std::path::Path;

/// What a field name is registered as.
#[derive(Debug, Clone)]
enum FieldEntry {
    /// A field with exactly one widget
    Single,
    /// A radio group: shared parent plus one kid per button
    RadioGroup {
        parent: ObjectRef,
        template: RadioField,
        kids: Vec<ObjectRef>,
        /// On-state of each kid in `kids` order; empty when the group has none
        on_states: Vec<String>,
    },
}

/// Builds a one-page form document.
#[derive(Debug)]
pub struct DocumentBuilder {
    config: DocumentConfig,
    store: ObjectStore,
    factory: FieldFactory,
    acroform: AcroFormBuilder,
    fonts: FontResources,
    catalog_ref: ObjectRef,
    pages_ref: ObjectRef,
    page_ref: ObjectRef,
    contents_ref: ObjectRef,
    acroform_ref: ObjectRef,
    info_ref: Option<ObjectRef>,
    annots: Vec<ObjectRef>,
    fields: HashMap<String, FieldEntry>,
    finalized: Option<Document>,
}

impl DocumentBuilder {
    /// Create a document with default configuration (US Letter, PDF 1.7).
    pub fn new() -> Result<Self> {
        Self::with_config(DocumentConfig::default())
    }

    /// Create a document with the given configuration.
    ///
    /// Registers the catalog, page tree, page, content stream, AcroForm and
    /// standard fonts, in that order.
    pub fn with_config(config: DocumentConfig) -> Result<Self> {
        if !config.media_box.is_finite() || !config.media_box.has_area() {
            return Err(Error::InvalidGeometry {
                field: "MediaBox".to_string(),
                reason: "media box must have positive, finite dimensions".to_string(),
            });
        }

        let mut store = ObjectStore::new();
        let catalog_ref = store.allocate(Object::Null)?;
        let pages_ref = store.allocate(Object::Null)?;
        let page_ref = store.allocate(Object::Null)?;
        let contents_ref = store.allocate(Object::Stream {
            dict: Default::default(),
            data: bytes::Bytes::new(),
        })?;
        let acroform_ref = store.allocate(Object::Null)?;
        let helv = store.allocate(Object::Dictionary(standard_font("Helvetica")))?;
        let zadb = store.allocate(Object::Dictionary(standard_font("ZapfDingbats")))?;
        let info_ref = if config.has_info() {
            Some(store.allocate(info_dict(&config))?)
        } else {
            None
        };

        let mut builder = Self {
            factory: FieldFactory::new(config.default_appearance.clone()),
            acroform: AcroFormBuilder::new()
                .with_default_appearance(config.default_appearance.clone())
                .with_need_appearances(config.need_appearances),
            fonts: FontResources::new(helv, zadb),
            config,
            store,
            catalog_ref,
            pages_ref,
            page_ref,
            contents_ref,
            acroform_ref,
            info_ref,
            annots: Vec::new(),
            fields: HashMap::new(),
            finalized: None,
        };

        builder.store.update(
            catalog_ref,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", Object::Reference(pages_ref)),
                ("AcroForm", Object::Reference(acroform_ref)),
            ]),
        )?;
        builder.store.update(
            pages_ref,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                ("Kids", Object::Array(vec![Object::Reference(page_ref)])),
                ("Count", Object::Integer(1)),
            ]),
        )?;
        builder.sync_page()?;
        builder.sync_acroform()?;

        log::debug!(
            "New form document: catalog {}, page {}, media box {:?}",
            catalog_ref,
            page_ref,
            builder.config.media_box
        );
        Ok(builder)
    }

    /// Add a widget for `spec` at `bounds` and return its reference.
    ///
    /// For radio group members the returned reference is the kid widget;
    /// the group's parent field is created with the first member.
    pub fn add_widget(&mut self, spec: impl Into<FieldSpec>, bounds: Rect) -> Result<ObjectRef> {
        self.ensure_open()?;
        let spec = spec.into();
        self.factory.validate(&spec)?;
        self.check_bounds(spec.name(), &bounds)?;

        let reference = match spec.as_radio() {
            Some(radio) => self.add_radio_member(radio, bounds)?,
            None => self.add_single_field(&spec, bounds)?,
        };
        log::debug!(
            "Added {} widget '{}' as {} at {:?}",
            spec.field_type(),
            spec.name(),
            reference,
            bounds
        );
        Ok(reference)
    }

    /// Add a free-text label with the default box size (200 x 16).
    pub fn add_label(&mut self, text: &str, origin: Point) -> Result<ObjectRef> {
        self.add_label_with_size(text, origin, DEFAULT_LABEL_WIDTH, DEFAULT_LABEL_HEIGHT)
    }

    /// Add a free-text label with an explicit box size.
    ///
    /// Labels are page annotations only; they never appear in the AcroForm.
    pub fn add_label_with_size(
        &mut self,
        text: &str,
        origin: Point,
        width: f32,
        height: f32,
    ) -> Result<ObjectRef> {
        self.ensure_open()?;
        let rect = Rect::at(origin, width, height);
        self.check_bounds(text, &rect)?;

        let label = LabelAnnotation::new(rect, text).with_font_size(self.config.label_font_size);
        let reference = self
            .store
            .allocate(Object::Dictionary(label.build(self.page_ref)))?;
        self.annots.push(reference);
        self.sync_page()?;

        log::debug!("Added label {:?} as {}", text, reference);
        Ok(reference)
    }

    /// Complete the document.
    ///
    /// Calling this again returns the same document; any later `add_*` call
    /// fails with [`Error::DocumentFinalized`].
    pub fn finalize(&mut self) -> Result<Document> {
        if let Some(document) = &self.finalized {
            return Ok(document.clone());
        }

        let document = Document {
            store: self.store.clone(),
            root: self.catalog_ref,
            info: self.info_ref,
            version: self.config.version.clone(),
            compress: self.config.compress,
        };
        log::debug!("Finalized document with {} objects", document.store.len());
        self.finalized = Some(document.clone());
        Ok(document)
    }

    /// Whether [`finalize`](Self::finalize) has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    /// Reference of the single page.
    pub fn page(&self) -> ObjectRef {
        self.page_ref
    }

    /// Reference of the AcroForm dictionary.
    pub fn acroform(&self) -> ObjectRef {
        self.acroform_ref
    }

    /// Page annotations in insertion order.
    pub fn annotations(&self) -> &[ObjectRef] {
        &self.annots
    }

    /// Root-level AcroForm fields in insertion order.
    pub fn fields(&self) -> &[ObjectRef] {
        self.acroform.fields()
    }

    /// The object store backing this document.
    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    fn add_single_field(&mut self, spec: &FieldSpec, bounds: Rect) -> Result<ObjectRef> {
        let name = spec.name();
        if self.fields.contains_key(name) {
            return Err(Error::InvalidFieldConfiguration {
                field: name.to_string(),
                reason: "field name is already in use".to_string(),
            });
        }

        let dict = self.factory.build_field(spec, bounds, self.page_ref)?;
        let reference = self.store.allocate(Object::Dictionary(dict))?;

        self.annots.push(reference);
        self.acroform.add_field(reference);
        if spec.is_signature() {
            self.acroform.mark_signatures_exist();
        }
        self.fields.insert(name.to_string(), FieldEntry::Single);

        self.sync_page()?;
        self.sync_acroform()?;
        Ok(reference)
    }

    fn add_radio_member(&mut self, radio: &RadioField, bounds: Rect) -> Result<ObjectRef> {
        let name = radio.field_name();
        let existing = match self.fields.get(name) {
            None => None,
            Some(FieldEntry::Single) => {
                return Err(Error::InvalidFieldConfiguration {
                    field: name.to_string(),
                    reason: "name is already used by a non-radio field".to_string(),
                });
            },
            Some(FieldEntry::RadioGroup {
                parent,
                template,
                on_states,
                ..
            }) => {
                if !template.same_group(radio) {
                    return Err(Error::InvalidFieldConfiguration {
                        field: name.to_string(),
                        reason: "radio group members must agree on options, value, flags and \
                                 whether they name an on state"
                            .to_string(),
                    });
                }
                if let Some(state) = radio.on_state() {
                    if !radio.in_unison() && on_states.iter().any(|s| s == state) {
                        return Err(Error::InvalidFieldConfiguration {
                            field: name.to_string(),
                            reason: format!(
                                "on state '{state}' is already used by another button in the group"
                            ),
                        });
                    }
                }
                Some(*parent)
            },
        };

        let parent = match existing {
            Some(parent) => parent,
            None => {
                let parent_dict = self.factory.build_radio_parent(radio, &[], &[])?;
                let parent = self.store.allocate(Object::Dictionary(parent_dict))?;
                self.acroform.add_field(parent);
                self.fields.insert(
                    name.to_string(),
                    FieldEntry::RadioGroup {
                        parent,
                        template: radio.clone(),
                        kids: Vec::new(),
                        on_states: Vec::new(),
                    },
                );
                parent
            },
        };

        let kid_dict = self
            .factory
            .build_radio_kid(radio, parent, bounds, self.page_ref)?;
        let kid = self.store.allocate(Object::Dictionary(kid_dict))?;
        self.annots.push(kid);
        if let Some(FieldEntry::RadioGroup {
            kids, on_states, ..
        }) = self.fields.get_mut(name)
        {
            kids.push(kid);
            if let Some(state) = radio.on_state() {
                on_states.push(state.to_string());
            }
        }

        self.sync_radio_parent(name)?;
        self.sync_page()?;
        self.sync_acroform()?;
        Ok(kid)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finalized.is_some() {
            return Err(Error::DocumentFinalized);
        }
        Ok(())
    }

    fn check_bounds(&self, field: &str, bounds: &Rect) -> Result<()> {
        let reason = if !bounds.is_finite() {
            "bounds must be finite numbers"
        } else if !bounds.has_area() {
            "width and height must be positive"
        } else if !self.config.media_box.contains_rect(bounds) {
            "bounds fall outside the page media box"
        } else {
            return Ok(());
        };
        Err(Error::InvalidGeometry {
            field: field.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Rewrite the page object from the current annotation list.
    fn sync_page(&mut self) -> Result<()> {
        let annots = self.annots.iter().map(|r| Object::Reference(*r)).collect();
        let page = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Page")),
            ("Parent", Object::Reference(self.pages_ref)),
            ("MediaBox", super::form_fields::rect_object(&self.config.media_box)),
            ("Resources", Object::Dictionary(self.fonts.resources())),
            ("Contents", Object::Reference(self.contents_ref)),
            ("Annots", Object::Array(annots)),
        ]);
        self.store.update(self.page_ref, page)
    }

    fn sync_acroform(&mut self) -> Result<()> {
        let dict = self.acroform.build(&self.fonts);
        self.store.update(self.acroform_ref, Object::Dictionary(dict))
    }

    fn sync_radio_parent(&mut self, name: &str) -> Result<()> {
        let Some(FieldEntry::RadioGroup {
            parent,
            template,
            kids,
            on_states,
        }) = self.fields.get(name)
        else {
            return Ok(());
        };

        let dict = self.factory.build_radio_parent(template, kids, on_states)?;
        let parent = *parent;
        self.store.update(parent, Object::Dictionary(dict))
    }
}

fn info_dict(config: &DocumentConfig) -> Object {
    let entries = [
        ("Title", &config.title),
        ("Author", &config.author),
        ("Creator", &config.creator),
    ];
    Object::Dictionary(
        entries
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| (key.to_string(), text_string(v)))
            })
            .collect(),
    )
}

/// A finalized form document, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    store: ObjectStore,
    root: ObjectRef,
    info: Option<ObjectRef>,
    version: String,
    compress: bool,
}

impl Document {
    /// Serialize to PDF bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.serializer().serialize()
    }

    /// Serialize and return the recorded xref offsets alongside the bytes.
    pub fn to_bytes_with_xref(&self) -> Result<(Vec<u8>, Vec<XrefEntry>)> {
        self.serializer().serialize_with_xref()
    }

    /// Serialize and write atomically to `path`.
    ///
    /// Nothing is written if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        write_atomic(&bytes, path)
    }

    /// The catalog reference.
    pub fn root(&self) -> ObjectRef {
        self.root
    }

    /// The object store.
    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    fn serializer(&self) -> Serializer<'_> {
        Serializer::new(&self.store, self.root)
            .with_info(self.info)
            .with_version(self.version.clone())
            .with_compress(self.compress)
    }
}
