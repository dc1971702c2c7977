//! Tests for writing generated documents

use std::fs;

use skanr_domain::OutputDocument;
use skanr_infrastructure::write_document;

fn document() -> OutputDocument {
    OutputDocument {
        hint_name: "SkanrRegistrations.g.cs".to_string(),
        namespace: "Sample.App".to_string(),
        imports: Vec::new(),
        groups: Vec::new(),
        text: "// <auto-generated />\n".to_string(),
    }
}

#[test]
fn test_write_document_creates_directory() {
    let dir = tempfile::tempdir().expect("tempdir should succeed");
    let out_dir = dir.path().join("generated").join("nested");

    let path = write_document(&out_dir, &document()).expect("write should succeed");

    assert_eq!(path, out_dir.join("SkanrRegistrations.g.cs"));
    assert_eq!(
        fs::read_to_string(&path).expect("read should succeed"),
        "// <auto-generated />\n"
    );
}

#[test]
fn test_write_document_overwrites() {
    let dir = tempfile::tempdir().expect("tempdir should succeed");
    write_document(dir.path(), &document()).expect("first write should succeed");

    let mut updated = document();
    updated.text = "// updated\n".to_string();
    let path = write_document(dir.path(), &updated).expect("second write should succeed");

    assert_eq!(fs::read_to_string(path).expect("read should succeed"), "// updated\n");
}
