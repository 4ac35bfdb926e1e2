use std::io::Write;
use std::process::Command;

const MODEL: &str = r#"
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix type: <http://example.com/types/> .
@prefix customer: <http://example.com/customers/> .
@prefix props: <http://example.com/props/> .
@prefix location: <http://example.com/location/> .

customer:99999 rdf:type type:Customer ;
  props:name "John Smith" ;
  props:location location:88888 .

location:88888 rdf:type type:Location ;
  props:address "99 River Lane" .
"#;

fn write_model(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(MODEL.as_bytes()).unwrap();
    path
}

#[test]
fn test_convert_turtle_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "model.ttl");

    let output = Command::new(env!("CARGO_BIN_EXE_rdf2exhibit"))
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = doc["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(doc["properties"]["location"]["valueType"], "item");
    assert_eq!(
        doc["types"]["Customer"]["uri"],
        "http://example.com/types/Customer"
    );
    // label completeness holds in the serialized document too
    for item in items {
        assert!(item["label"].as_str().map(|l| !l.is_empty()).unwrap_or(false));
    }
}

#[test]
fn test_explicit_format_flag() {
    let dir = tempfile::tempdir().unwrap();
    // extension gives no hint; the flag decides
    let path = write_model(&dir, "model.rdfdata");

    let output = Command::new(env!("CARGO_BIN_EXE_rdf2exhibit"))
        .arg(&path)
        .args(["--format", "turtle"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["items"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "model.ttl");

    let output = Command::new(env!("CARGO_BIN_EXE_rdf2exhibit"))
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_missing_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_rdf2exhibit"))
        .arg("does-not-exist.ttl")
        .output()
        .unwrap();
    assert!(!output.status.success());
}
