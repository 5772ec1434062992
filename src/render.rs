/// Printable ASCII renders as the literal character; everything else (control
/// bytes, newline included, and high bytes) as a `\xNN` escape so the
/// positional listing stays one row per byte.
pub fn render_byte(b: u8) -> String {
    if (32..=126).contains(&b) {
        (b as char).to_string()
    } else {
        format!("\\x{}", hex::encode([b]))
    }
}

/// Classic 16-bytes-per-row hex dump with absolute offsets and an ASCII gutter.
pub fn hex_dump(bytes: &[u8], start_offset: u64) -> String {
    let mut out = String::new();
    for (i, row) in bytes.chunks(16).enumerate() {
        let offs = start_offset + (i as u64) * 16;
        let hexs: String = row.iter().map(|b| format!("{:02x} ", b)).collect();
        let ascii: String = row
            .iter()
            .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
            .collect();
        out.push_str(&format!("{:08x}  {:<48}  |{}|\n", offs, hexs, ascii));
    }
    out
}
