use byteprobe::inspect_file;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    path
}

#[test]
fn report_serializes_with_expected_fields() {
    let path = temp_file("byteprobe_json_fields.bin", b"abc\ndef\n");

    let report = inspect_file(&path, 5, 2).expect("inspect_file failed");
    let json: Value = serde_json::to_value(&report).expect("serialize failed");

    assert_eq!(json["total_length"], 8);
    assert_eq!(json["target_offset"], 5);
    assert_eq!(json["target_byte"]["value"], 101);
    assert_eq!(json["target_byte"]["rendered"], "e");
    assert_eq!(json["containing_line"], "def");
    assert_eq!(json["column_in_line"], 1);

    let entries = json["window_entries"].as_array().expect("array expected");
    assert_eq!(entries.len(), 5);
    let flagged: Vec<&Value> = entries
        .iter()
        .filter(|e| e["target"] == Value::Bool(true))
        .collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0]["offset"], 5);
}

#[test]
fn nonprintable_entries_render_as_escapes_in_json() {
    let path = temp_file("byteprobe_json_escape.bin", b"a\x00b");

    let report = inspect_file(&path, 1, 1).expect("inspect_file failed");
    let json: Value = serde_json::to_value(&report).expect("serialize failed");

    assert_eq!(json["target_byte"]["rendered"], "\\x00");
}
