use crate::{
    buffer::ByteBuffer,
    render::{hex_dump, render_byte},
    report::{HexDump, Report, TargetByte, WindowEntry},
};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum InspectError {
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("offset {offset} is out of range (file length {length})")]
    OffsetOutOfRange { offset: u64, length: u64 },
}

pub type Result<T> = std::result::Result<T, InspectError>;

/// Inspect the byte at `target_offset` and a symmetric window of `window`
/// bytes around it.
///
/// Pure function of the buffer contents and arguments: identical inputs yield
/// identical reports. Fails with [`InspectError::OffsetOutOfRange`] when the
/// offset is at or past the end of the buffer; no partial report is produced.
pub fn inspect(buf: &ByteBuffer, target_offset: u64, window: u64) -> Result<Report> {
    let length = buf.len();
    let value = buf
        .byte_at(target_offset)
        .ok_or(InspectError::OffsetOutOfRange {
            offset: target_offset,
            length,
        })?;

    let (win_start, win_end) = buf.window_bounds(target_offset, window);
    let window_entries = buf
        .slice(win_start, win_end)
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let offset = win_start + i as u64;
            WindowEntry {
                offset,
                value: b,
                rendered: render_byte(b),
                target: offset == target_offset,
            }
        })
        .collect();

    let (line_start, line_end) = buf.line_bounds(target_offset);
    let containing_line = String::from_utf8_lossy(buf.slice(line_start, line_end)).into_owned();

    Ok(Report {
        total_length: length,
        target_offset,
        target_byte: TargetByte {
            value,
            rendered: render_byte(value),
        },
        window_entries,
        containing_line,
        line_start_offset: line_start,
        column_in_line: target_offset - line_start,
    })
}

/// Read `path` fully into memory and inspect it. See [`inspect`].
///
/// ```no_run
/// fn main() -> anyhow::Result<()> {
///     let report = byteprobe::inspect_file("policy.schema", 1175, 20)?;
///     println!("byte there: {}", report.target_byte.rendered);
///     Ok(())
/// }
/// ```
pub fn inspect_file(path: impl AsRef<Path>, target_offset: u64, window: u64) -> Result<Report> {
    let path = path.as_ref();
    let buf = ByteBuffer::from_file(path).map_err(|source| InspectError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    inspect(&buf, target_offset, window)
}

/// Hex-dump a range of bytes from the buffer.
///
/// `max_len` controls the maximum number of bytes to dump. This function
/// never reads past EOF; if `offset + max_len` goes beyond the buffer size,
/// the returned length will be smaller than `max_len`.
pub fn hex_window(buf: &ByteBuffer, offset: u64, max_len: u64) -> HexDump {
    use std::cmp::min;

    // How many bytes are actually available from this offset to EOF.
    let available = buf.len().saturating_sub(offset);

    // Don't read past EOF or more than the caller requested.
    let to_read = min(available, max_len);

    // If nothing is available, just return an empty dump.
    if to_read == 0 {
        return HexDump {
            offset,
            length: 0,
            hex: String::new(),
        };
    }

    let data = buf.slice(offset, offset + to_read);
    HexDump {
        offset,
        length: to_read, // <-- actual bytes dumped, not max_len
        hex: hex_dump(data, offset),
    }
}
