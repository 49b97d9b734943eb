//! Whole-document serialization.
//!
//! Produces the complete file: header, indirect objects in increasing object
//! number, cross-reference table and trailer. Offsets are taken from the
//! output buffer as each object is written, so every xref entry points at
//! the first byte of its `N G obj` line.

use super::object_serializer::ObjectSerializer;
use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};
use crate::store::ObjectStore;
use std::collections::HashSet;
use std::io::Write;

/// Binary marker comment written after the header line.
const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";

/// Byte offset of one in-use object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrefEntry {
    /// The object
    pub reference: ObjectRef,
    /// Offset of the object's first byte
    pub offset: usize,
}

/// Serializes an [`ObjectStore`] into a PDF file.
#[derive(Debug, Clone)]
pub struct Serializer<'a> {
    store: &'a ObjectStore,
    root: ObjectRef,
    info: Option<ObjectRef>,
    version: String,
    compress: bool,
}

impl<'a> Serializer<'a> {
    /// Create a serializer for `store` with `root` as the document catalog.
    pub fn new(store: &'a ObjectStore, root: ObjectRef) -> Self {
        Self {
            store,
            root,
            info: None,
            version: "1.7".to_string(),
            compress: false,
        }
    }

    /// Reference the document information dictionary from the trailer.
    pub fn with_info(mut self, info: Option<ObjectRef>) -> Self {
        self.info = info;
        self
    }

    /// Set the header version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Compress streams that carry no filter yet.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Serialize the document.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        self.serialize_with_xref().map(|(bytes, _)| bytes)
    }

    /// Serialize the document and return the offsets recorded in the xref table.
    pub fn serialize_with_xref(&self) -> Result<(Vec<u8>, Vec<XrefEntry>)> {
        self.check_references()?;
        self.report_unreachable();

        let serializer = ObjectSerializer::new();
        let mut output = Vec::new();
        let mut entries = Vec::with_capacity(self.store.len());

        writeln!(output, "%PDF-{}", self.version)?;
        output.extend_from_slice(BINARY_MARKER);

        for object in self.store.iter() {
            entries.push(XrefEntry {
                reference: object.reference,
                offset: output.len(),
            });
            log::trace!("Writing object {} at offset {}", object.reference, output.len());

            match &object.value {
                Object::Stream { dict, data } if self.compress && !dict.contains_key("Filter") => {
                    let compressed = compress_data(data)?;
                    let mut dict = dict.clone();
                    dict.insert("Filter".to_string(), Object::Name("FlateDecode".to_string()));
                    let stream = Object::Stream {
                        dict,
                        data: bytes::Bytes::from(compressed),
                    };
                    serializer.write_indirect(&mut output, object.reference, &stream)?;
                },
                value => serializer.write_indirect(&mut output, object.reference, value)?,
            }
        }

        let xref_start = output.len();
        let size = entries.len() + 1;
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;
        // Object 0 is always free
        write!(output, "0000000000 65535 f\r\n")?;
        for entry in &entries {
            write!(output, "{:010} {:05} n\r\n", entry.offset, entry.reference.gen)?;
        }

        let mut trailer = vec![
            ("Size", Object::Integer(size as i64)),
            ("Root", Object::Reference(self.root)),
        ];
        if let Some(info) = self.info {
            trailer.push(("Info", Object::Reference(info)));
        }
        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &ObjectSerializer::dict(trailer))?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        writeln!(output, "%%EOF")?;

        log::debug!("Serialized {} objects into {} bytes", entries.len(), output.len());
        Ok((output, entries))
    }

    /// Every reference held by the trailer or any stored object must resolve.
    fn check_references(&self) -> Result<()> {
        for reference in std::iter::once(self.root).chain(self.info) {
            self.store.resolve(reference)?;
        }
        for object in self.store.iter() {
            if let Some(missing) = object
                .value
                .references()
                .into_iter()
                .find(|r| !self.store.contains(*r))
            {
                log::debug!("Object {} references missing {}", object.reference, missing);
                return Err(Error::ObjectNotFound(missing));
            }
        }
        Ok(())
    }

    /// Objects reachable from the trailer roots.
    fn reachable(&self) -> HashSet<ObjectRef> {
        let mut seen = HashSet::new();
        let mut pending: Vec<ObjectRef> = std::iter::once(self.root).chain(self.info).collect();
        while let Some(reference) = pending.pop() {
            if !seen.insert(reference) {
                continue;
            }
            if let Ok(value) = self.store.resolve(reference) {
                pending.extend(value.references());
            }
        }
        seen
    }

    fn report_unreachable(&self) {
        let reachable = self.reachable();
        for object in self.store.iter() {
            if !reachable.contains(&object.reference) {
                log::warn!(
                    "Object {} is not reachable from the catalog; writing it anyway",
                    object.reference
                );
            }
        }
    }
}

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
