//! Writing documents to disk and builder lifecycle.

mod common;

use common::{annots, fields, load};
use pdf_formgen::geometry::{Point, Rect};
use pdf_formgen::writer::form_fields::{CheckboxField, TextField};
use pdf_formgen::{DocumentBuilder, Error};
use std::fs;
use std::path::Path;

fn small_document() -> DocumentBuilder {
    let mut builder = DocumentBuilder::new().unwrap();
    builder.add_label("Name:", Point::new(50.0, 726.0)).unwrap();
    builder
        .add_widget(TextField::new("name"), Rect::new(50.0, 700.0, 300.0, 24.0))
        .unwrap();
    builder
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.pdf");

    let document = small_document().finalize().unwrap();
    document.save(&path).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(written, document.to_bytes().unwrap());
    assert_eq!(dir_entries(dir.path()), vec!["form.pdf".to_string()]);

    let doc = load(&written);
    assert_eq!(fields(&doc).len(), 1);
    assert_eq!(annots(&doc).len(), 2);
}

#[test]
fn test_save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.pdf");
    fs::write(&path, b"stale contents").unwrap();

    small_document().finalize().unwrap().save(&path).unwrap();

    let written = fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));
    assert_eq!(dir_entries(dir.path()), vec!["form.pdf".to_string()]);
}

#[test]
fn test_save_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist").join("form.pdf");

    let err = small_document().finalize().unwrap().save(&path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(!path.exists());
    assert!(dir_entries(dir.path()).is_empty(), "no partial or temporary files");
}

#[test]
fn test_save_onto_directory() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("taken");
    fs::create_dir(&target).unwrap();

    let err = small_document().finalize().unwrap().save(&target).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(target.is_dir());
    assert_eq!(dir_entries(dir.path()), vec!["taken".to_string()]);
    assert!(dir_entries(&target).is_empty());
}

#[test]
fn test_invalid_geometry_keeps_annotations() {
    let mut builder = small_document();
    let before = builder.annotations().to_vec();
    let objects = builder.store().len();

    let err = builder
        .add_widget(CheckboxField::new("agree"), Rect::new(600.0, 780.0, 20.0, 20.0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { ref field, .. } if field == "agree"));

    let err = builder
        .add_widget(TextField::new("bad"), Rect::new(50.0, 50.0, f32::NAN, 20.0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }));

    let err = builder
        .add_label("Off the edge", Point::new(50.0, 790.0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }));

    assert_eq!(builder.annotations(), &before[..]);
    assert_eq!(builder.store().len(), objects);

    // A rejected name stays free
    builder
        .add_widget(CheckboxField::new("agree"), Rect::new(50.0, 650.0, 20.0, 20.0))
        .unwrap();
}

#[test]
fn test_no_additions_after_finalize() {
    let mut builder = small_document();
    let first = builder.finalize().unwrap();
    assert!(builder.is_finalized());

    assert!(matches!(
        builder.add_widget(TextField::new("late"), Rect::new(50.0, 500.0, 100.0, 20.0)),
        Err(Error::DocumentFinalized)
    ));
    assert!(matches!(
        builder.add_label("late", Point::new(50.0, 400.0)),
        Err(Error::DocumentFinalized)
    ));

    let second = builder.finalize().unwrap();
    assert_eq!(first, second);
}
