use serde::Serialize;

/// A JSON-serializable inspection report for one byte offset.
///
/// This is the full output of [`crate::inspect`], suitable both for the CLI's
/// `--json` mode and for embedding in other tools.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Total byte count of the inspected file
    pub total_length: u64,
    /// The offset that was inspected
    pub target_offset: u64,
    /// The byte at the target offset
    pub target_byte: TargetByte,
    /// Ordered context bytes around the target, clamped to the file
    pub window_entries: Vec<WindowEntry>,
    /// Text of the line containing the target, lossily decoded
    pub containing_line: String,
    /// Absolute offset where the containing line starts
    pub line_start_offset: u64,
    /// `target_offset - line_start_offset`
    pub column_in_line: u64,
}

#[derive(Debug, Serialize)]
pub struct TargetByte {
    /// Raw byte value
    pub value: u8,
    /// Printable character, or a `\xNN` escape for non-printable bytes
    pub rendered: String,
}

/// One row of the positional window listing.
#[derive(Debug, Serialize)]
pub struct WindowEntry {
    pub offset: u64,
    pub value: u8,
    pub rendered: String,
    /// True for exactly one entry: the target offset itself
    pub target: bool,
}

/// Result of a hex dump operation containing the formatted hex output.
#[derive(Debug, Serialize)]
pub struct HexDump {
    /// Starting offset of the dumped data
    pub offset: u64,
    /// Actual number of bytes that were read and dumped
    pub length: u64,
    /// Formatted hex dump string with addresses and ASCII representation
    pub hex: String,
}
