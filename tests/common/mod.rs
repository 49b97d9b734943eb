//! Shared helpers for reading generated documents back with lopdf.

#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId};

/// Parse bytes with lopdf, failing the test on any error.
pub fn load(bytes: &[u8]) -> Document {
    Document::load_mem(bytes).expect("output should parse with lopdf")
}

pub fn name(obj: &Object) -> &[u8] {
    match obj {
        Object::Name(n) => n,
        other => panic!("expected name, got {:?}", other),
    }
}

pub fn string(obj: &Object) -> &[u8] {
    match obj {
        Object::String(s, _) => s,
        other => panic!("expected string, got {:?}", other),
    }
}

pub fn int(obj: &Object) -> i64 {
    match obj {
        Object::Integer(i) => *i,
        other => panic!("expected integer, got {:?}", other),
    }
}

pub fn reference(obj: &Object) -> ObjectId {
    match obj {
        Object::Reference(id) => *id,
        other => panic!("expected reference, got {:?}", other),
    }
}

pub fn array(obj: &Object) -> &[Object] {
    match obj {
        Object::Array(items) => items,
        other => panic!("expected array, got {:?}", other),
    }
}

pub fn dict<'a>(doc: &'a Document, id: ObjectId) -> &'a Dictionary {
    match doc.get_object(id).expect("object should exist") {
        Object::Dictionary(d) => d,
        Object::Stream(s) => &s.dict,
        other => panic!("expected dictionary at {:?}, got {:?}", id, other),
    }
}

/// Follow a reference entry of `d`.
pub fn follow<'a>(doc: &'a Document, d: &Dictionary, key: &[u8]) -> &'a Dictionary {
    dict(doc, reference(d.get(key).expect("key should exist")))
}

pub fn catalog(doc: &Document) -> &Dictionary {
    let root = reference(doc.trailer.get(b"Root").expect("trailer should have Root"));
    dict(doc, root)
}

pub fn acroform(doc: &Document) -> &Dictionary {
    follow(doc, catalog(doc), b"AcroForm")
}

pub fn page(doc: &Document) -> &Dictionary {
    let pages = follow(doc, catalog(doc), b"Pages");
    let kids = array(pages.get(b"Kids").expect("Pages should have Kids"));
    assert_eq!(kids.len(), 1);
    dict(doc, reference(&kids[0]))
}

/// AcroForm `Fields`, resolved.
pub fn fields(doc: &Document) -> Vec<(ObjectId, &Dictionary)> {
    array(acroform(doc).get(b"Fields").expect("AcroForm should have Fields"))
        .iter()
        .map(|f| {
            let id = reference(f);
            (id, dict(doc, id))
        })
        .collect()
}

/// Page `Annots`, resolved.
pub fn annots(doc: &Document) -> Vec<(ObjectId, &Dictionary)> {
    array(page(doc).get(b"Annots").expect("Page should have Annots"))
        .iter()
        .map(|a| {
            let id = reference(a);
            (id, dict(doc, id))
        })
        .collect()
}

/// Field with the given `T`, if any.
pub fn field_named<'a>(doc: &'a Document, t: &str) -> Option<&'a Dictionary> {
    fields(doc)
        .into_iter()
        .map(|(_, d)| d)
        .find(|d| d.get(b"T").map(|v| string(v) == t.as_bytes()).unwrap_or(false))
}

/// Parse the classic xref table at the end of `bytes`: `(object number, offset, generation, in use)`.
pub fn xref_entries(bytes: &[u8]) -> Vec<(u32, usize, u16, bool)> {
    let text = String::from_utf8_lossy(bytes);
    let start: usize = text
        .trim_end()
        .lines()
        .rev()
        .nth(1)
        .and_then(|l| l.trim().parse().ok())
        .expect("startxref offset");

    let table = &bytes[start..];
    assert!(table.starts_with(b"xref\n"), "startxref must point at the xref keyword");
    let table = &table[5..];
    let header_end = table.iter().position(|&b| b == b'\n').expect("subsection header");
    let header = std::str::from_utf8(&table[..header_end]).expect("ascii header");
    let mut parts = header.split_whitespace();
    let first: u32 = parts.next().and_then(|p| p.parse().ok()).expect("first object");
    let count: usize = parts.next().and_then(|p| p.parse().ok()).expect("entry count");

    let body = &table[header_end + 1..];
    (0..count)
        .map(|i| {
            let line = &body[i * 20..(i + 1) * 20];
            assert!(line.ends_with(b"\r\n"), "xref lines are 20 bytes");
            let line = std::str::from_utf8(&line[..18]).expect("ascii entry");
            let offset = line[..10].parse().expect("offset");
            let gen = line[11..16].parse().expect("generation");
            let in_use = &line[17..18] == "n";
            (first + i as u32, offset, gen, in_use)
        })
        .collect()
}
