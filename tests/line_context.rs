use byteprobe::{ByteBuffer, inspect};

#[test]
fn file_without_newlines_is_one_line() {
    let buf = ByteBuffer::from_bytes(b"no newlines here".to_vec());

    let report = inspect(&buf, 3, 4).expect("inspect failed");

    assert_eq!(report.line_start_offset, 0);
    assert_eq!(report.containing_line, "no newlines here");
    assert_eq!(report.column_in_line, 3);
}

#[test]
fn last_line_without_trailing_newline() {
    let buf = ByteBuffer::from_bytes(b"first\nsecond".to_vec());

    let report = inspect(&buf, 8, 2).expect("inspect failed");

    assert_eq!(report.containing_line, "second");
    assert_eq!(report.line_start_offset, 6);
    assert_eq!(report.column_in_line, 2);
}

#[test]
fn newline_target_renders_as_escape() {
    let buf = ByteBuffer::from_bytes(b"abc\ndef\n".to_vec());

    // offset 3 is the '\n' terminating "abc"
    let report = inspect(&buf, 3, 2).expect("inspect failed");

    assert_eq!(report.target_byte.value, 0x0a);
    assert_eq!(report.target_byte.rendered, "\\x0a");
    // the newline terminates "abc": column equals the line length
    assert_eq!(report.containing_line, "abc");
    assert_eq!(report.column_in_line, 3);
}

#[test]
fn column_stays_within_line_length() {
    let content = b"alpha\nbeta\ngamma\n".to_vec();
    let buf = ByteBuffer::from_bytes(content.clone());

    for offset in 0..content.len() as u64 {
        let report = inspect(&buf, offset, 3).expect("inspect failed");
        assert_eq!(
            report.column_in_line,
            offset - report.line_start_offset,
            "offset {offset}"
        );
        assert!(
            report.column_in_line <= report.containing_line.len() as u64,
            "offset {offset}: column {} exceeds line {:?}",
            report.column_in_line,
            report.containing_line
        );
    }
}

#[test]
fn invalid_utf8_in_line_is_replaced_not_fatal() {
    // 0xff is not valid UTF-8; the line must decode with a replacement glyph
    let buf = ByteBuffer::from_bytes(b"ok\nbad\xffbyte\nok\n".to_vec());

    let report = inspect(&buf, 4, 2).expect("inspect failed");

    assert_eq!(report.containing_line, "bad\u{fffd}byte");
    assert_eq!(report.column_in_line, 1);
}
