//! Cross-reference table tests: numbering, offsets and determinism.

mod common;

use common::{annots, fields, int, load, xref_entries};
use pdf_formgen::geometry::{Point, Rect};
use pdf_formgen::writer::form_fields::{CheckboxField, ChoiceField, RadioField, TextField};
use pdf_formgen::{DocumentBuilder, DocumentConfig};
use proptest::prelude::*;

fn sample_document(config: DocumentConfig) -> DocumentBuilder {
    let mut builder = DocumentBuilder::with_config(config).unwrap();
    builder.add_label("Name:", Point::new(50.0, 726.0)).unwrap();
    builder
        .add_widget(TextField::new("name"), Rect::new(50.0, 700.0, 300.0, 24.0))
        .unwrap();
    builder
        .add_widget(RadioField::new("group"), Rect::new(50.0, 600.0, 20.0, 20.0))
        .unwrap();
    builder
        .add_widget(RadioField::new("group"), Rect::new(100.0, 600.0, 20.0, 20.0))
        .unwrap();
    builder
        .add_widget(
            ChoiceField::combo("pick", ["One", "Two"]),
            Rect::new(50.0, 550.0, 200.0, 24.0),
        )
        .unwrap();
    builder
}

/// Every entry must point at its own `N G obj` line.
fn assert_offsets(bytes: &[u8]) {
    let entries = xref_entries(bytes);
    assert_eq!(entries[0], (0, 0, 65535, false));
    for &(id, offset, gen, in_use) in &entries[1..] {
        assert!(in_use);
        assert_eq!(gen, 0);
        let header = format!("{} {} obj\n", id, gen);
        assert!(
            bytes[offset..].starts_with(header.as_bytes()),
            "object {} offset {} points at {:?}",
            id,
            offset,
            String::from_utf8_lossy(&bytes[offset..(offset + 16).min(bytes.len())])
        );
    }
}

#[test]
fn test_object_numbers_are_contiguous() {
    let document = sample_document(DocumentConfig::default()).finalize().unwrap();
    let (bytes, recorded) = document.to_bytes_with_xref().unwrap();

    let entries = xref_entries(&bytes);
    assert_eq!(entries.len(), document.store().len() + 1);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.0 as usize, i);
    }
    for (parsed, recorded) in entries[1..].iter().zip(&recorded) {
        assert_eq!(parsed.0, recorded.reference.id);
        assert_eq!(parsed.1, recorded.offset);
    }

    let doc = load(&bytes);
    assert_eq!(int(doc.trailer.get(b"Size").unwrap()), entries.len() as i64);
}

#[test]
fn test_offsets_point_at_objects() {
    let document = sample_document(DocumentConfig::default()).finalize().unwrap();
    assert_offsets(&document.to_bytes().unwrap());
}

#[test]
fn test_offsets_with_compression() {
    let config = DocumentConfig::new().with_compress(true).with_creator("xref test");
    let bytes = sample_document(config).finalize().unwrap().to_bytes().unwrap();
    assert_offsets(&bytes);
    load(&bytes);
}

#[test]
fn test_startxref_points_at_table() {
    let document = sample_document(DocumentConfig::default()).finalize().unwrap();
    let bytes = document.to_bytes().unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.ends_with("%%EOF\n"));

    let start = text.rfind("startxref\n").unwrap();
    let offset: usize = text[start + 10..].lines().next().unwrap().parse().unwrap();
    assert_eq!(&bytes[offset..offset + 5], b"xref\n");
    assert_eq!(text.matches("xref\n0 ").count(), 1);
}

#[test]
fn test_serialization_is_deterministic() {
    let first = sample_document(DocumentConfig::default()).finalize().unwrap();
    let second = sample_document(DocumentConfig::default()).finalize().unwrap();
    assert_eq!(first.to_bytes().unwrap(), second.to_bytes().unwrap());
    assert_eq!(first.to_bytes().unwrap(), first.to_bytes().unwrap());
}

#[test]
fn test_finalize_is_idempotent() {
    let mut builder = sample_document(DocumentConfig::default());
    let first = builder.finalize().unwrap().to_bytes().unwrap();
    let second = builder.finalize().unwrap().to_bytes().unwrap();
    assert_eq!(first, second);
}

#[derive(Debug, Clone)]
enum Op {
    Label(f32, f32),
    Text(f32, f32),
    Checkbox(f32, f32),
    Radio(f32, f32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let pos = (0.0f32..400.0, 0.0f32..700.0);
    prop_oneof![
        pos.clone().prop_map(|(x, y)| Op::Label(x, y)),
        pos.clone().prop_map(|(x, y)| Op::Text(x, y)),
        pos.clone().prop_map(|(x, y)| Op::Checkbox(x, y)),
        pos.prop_map(|(x, y)| Op::Radio(x, y)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_xref_matches_objects(ops in prop::collection::vec(op_strategy(), 0..24)) {
        let mut builder = DocumentBuilder::new().unwrap();
        let mut expected_fields = 0;
        let mut radio_seen = false;

        for (i, op) in ops.iter().enumerate() {
            match *op {
                Op::Label(x, y) => {
                    builder.add_label(&format!("Label {}", i), Point::new(x, y)).unwrap();
                },
                Op::Text(x, y) => {
                    builder
                        .add_widget(
                            TextField::new(format!("text{}", i)),
                            Rect::new(x, y, 100.0, 20.0),
                        )
                        .unwrap();
                    expected_fields += 1;
                },
                Op::Checkbox(x, y) => {
                    builder
                        .add_widget(
                            CheckboxField::new(format!("check{}", i)),
                            Rect::new(x, y, 20.0, 20.0),
                        )
                        .unwrap();
                    expected_fields += 1;
                },
                Op::Radio(x, y) => {
                    builder
                        .add_widget(RadioField::new("radio"), Rect::new(x, y, 20.0, 20.0))
                        .unwrap();
                    if !radio_seen {
                        expected_fields += 1;
                        radio_seen = true;
                    }
                },
            }
        }

        let document = builder.finalize().unwrap();
        let bytes = document.to_bytes().unwrap();
        assert_offsets(&bytes);

        let entries = xref_entries(&bytes);
        prop_assert_eq!(entries.len(), document.store().len() + 1);

        let doc = load(&bytes);
        prop_assert_eq!(annots(&doc).len(), ops.len());
        prop_assert_eq!(fields(&doc).len(), expected_fields);
    }
}
